//! # Common Component Tests
