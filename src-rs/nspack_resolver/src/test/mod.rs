//! Test utilities for the resolver.
