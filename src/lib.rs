//! RBAC policy decision point and benchmark tooling.
//!
//! The decision API is a single route, `/v1/data/rbac/allow`, answering
//! `{"result":<bool>}`. Three server flavors share it: a stub that always
//! denies without reading the input, a real evaluator over hardcoded RBAC
//! rules, and a parse-only variant that isolates JSON parsing cost. The
//! `bench` and `queries` modules drive the same policy offline.

pub mod bench;
pub mod http;
pub mod logger;
pub mod policy;
pub mod queries;
pub mod server;
pub mod wire;
