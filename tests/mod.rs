//! Test suite for Conduit
//!
//! This module organizes all tests
