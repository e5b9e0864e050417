/// Lifecycle signal supplied by the host platform when it invokes the runner.
///
/// `All` is the value a normal running-system update passes; only an explicit
/// `Init` marks a first-time platform initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformProcess {
    Init,
    Update,
    All,
}

/// Phase a deployment script is tagged with at assembly time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemPhase {
    Initialization,
    Update,
}

impl SystemPhase {
    /// Map the host lifecycle signal to a phase.
    ///
    /// Anything other than the explicit `Init` signal maps to `Update`; this
    /// default branch is deliberate, not an oversight.
    pub fn for_process(process: PlatformProcess) -> Self {
        match process {
            PlatformProcess::Init => SystemPhase::Initialization,
            _ => SystemPhase::Update,
        }
    }
}
