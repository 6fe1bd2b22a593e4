pub mod subscriber;

pub const DEFAULT_JSON_LOG_FILE: &str = "log.json";

// model check log record fields:
pub const EVENT_FIELD: &str = "event";
pub const UNIVERSE_FIELD: &str = "universe";
pub const AXIOMS_FIELD: &str = "axioms";
pub const AXIOM_FIELD: &str = "axiom";
pub const HOLDS_FIELD: &str = "holds";
pub const REASON_FIELD: &str = "reason";

// log span types:
/// Inside the validation of a candidate model.
pub const MODEL_CHECK: &str = "@model_check";

// log event types:
/// The interpreted symbols were compared against the signature.
pub const COVERAGE: &str = "@coverage";

/// The kinds and arities of the interpretation were checked.
pub const ARITY: &str = "@arity";

/// An axiom was evaluated in the candidate model.
pub const AXIOM: &str = "@axiom";

/// The candidate is a model of the theory.
pub const MODEL: &str = "@model";

/// The candidate was rejected.
pub const REJECT: &str = "@reject";
