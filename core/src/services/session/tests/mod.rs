//! Tests for session service
