/// JOIN kinds used by the article statements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    LeftOuter,
}

impl JoinType {
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::LeftOuter => "LEFT OUTER JOIN",
        }
    }
}

/// A JOIN clause over a table or derived table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub join_type: JoinType,
    pub table: String,
    pub on_condition: String,
}

impl Join {
    /// Create an INNER JOIN
    pub fn inner(table: &str, on_condition: &str) -> Self {
        Self {
            join_type: JoinType::Inner,
            table: table.to_string(),
            on_condition: on_condition.to_string(),
        }
    }

    /// Create a LEFT OUTER JOIN
    pub fn left_outer(table: &str, on_condition: &str) -> Self {
        Self {
            join_type: JoinType::LeftOuter,
            table: table.to_string(),
            on_condition: on_condition.to_string(),
        }
    }

    /// Join against `follows` for the viewer
    ///
    /// Feed mode keeps only authors the viewer follows (INNER); list mode
    /// keeps every article and leaves `uf` NULL when there is no follow row.
    /// The single placeholder is the viewer id.
    pub fn follows(feed: bool) -> Self {
        let on = "u.id = uf.followee_id AND uf.follower_id = ?";
        if feed {
            Self::inner("follows uf", on)
        } else {
            Self::left_outer("follows uf", on)
        }
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        format!(
            "{} {} ON {}",
            self.join_type.to_sql(),
            self.table,
            self.on_condition
        )
    }
}
