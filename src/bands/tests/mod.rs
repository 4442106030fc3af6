//! Tests for band detection
