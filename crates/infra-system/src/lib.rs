// Benzene Launcher Infrastructure - System Adapters
// Implements: ProcessLauncher, BaseDirResolver, ConsoleSetup, OperatorPrompt

pub mod console_code_page;
pub mod executable_dir;
pub mod operator_prompt;
pub mod subprocess_launcher;

pub use console_code_page::ConsoleCodePage;
pub use executable_dir::ExecutableDirResolver;
pub use operator_prompt::{prompt_for, NoPrompt, StdinPrompt};
pub use subprocess_launcher::SubprocessLauncher;
