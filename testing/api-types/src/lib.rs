//! JSON fixture tests for the egress API types live in `tests/`.
