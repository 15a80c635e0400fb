use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use signal_hook::consts::SIGINT;
use signal_hook::consts::SIGTERM;
use wordfill_solver::core::termination::TerminationCondition;

/// Stops the search once the process has been sent SIGINT or SIGTERM, so that statistics are
/// still written when the user interrupts a long fill.
#[derive(Clone, Debug)]
pub(crate) struct OsSignal {
    interrupted: Arc<AtomicBool>,
}

impl OsSignal {
    /// Registers the handlers which raise the flag polled by [`OsSignal::should_stop`].
    pub(crate) fn install() -> std::io::Result<OsSignal> {
        let interrupted = Arc::new(AtomicBool::new(false));

        for signal in [SIGINT, SIGTERM] {
            let _ = signal_hook::flag::register(signal, Arc::clone(&interrupted))?;
        }

        Ok(OsSignal { interrupted })
    }
}

impl TerminationCondition for OsSignal {
    fn should_stop(&mut self) -> bool {
        self.interrupted.load(Ordering::Relaxed)
    }
}
