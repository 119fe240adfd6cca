/// Configuration for a foundation-model runtime client.
///
/// One value of this struct fully describes a client: where the runtime
/// lives, which model to invoke, and the sampling knobs sent with every
/// request. Construct it through [`crate::config::default_config`] for the
/// standard profiles, or literally for tests and unusual deployments.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Region the runtime is served from. Only used for operator-facing
    /// messages and the regional default endpoint; the wire protocol never
    /// sees it.
    pub region: String,

    /// Model identifier (e.g. `"anthropic.claude-v2"`).
    pub model: String,

    /// Base URL of the runtime; the invoke path is appended to it.
    pub endpoint: String,

    /// Maximum number of tokens to sample per completion.
    pub max_tokens: u32,

    /// Sampling temperature (0.0 = deterministic).
    pub temperature: f32,

    /// Sequences that terminate a completion.
    pub stop_sequences: Vec<String>,

    /// Optional request timeout in seconds.
    pub timeout_secs: Option<u64>,
}
