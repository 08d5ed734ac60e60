// rulebench-core/src/application/mod.rs

pub mod catalog;
pub mod editor;
pub mod execution;
pub mod scope;
pub mod store;

// --- RE-EXPORTS (FACADE PATTERN) ---
// The CLI only needs `use rulebench_core::application::{RuleCatalog, ExecutionController, ...}`
// without knowing the file layout.

pub use catalog::RuleCatalog;
pub use editor::{EditorMode, EditorState, RuleEditorController, SubmitOutcome};
pub use execution::{ExecuteOutcome, ExecutionController, ExecutionState};
pub use scope::ViewScope;
pub use store::{LoadOutcome, RuleCollectionStore, SharedStore, load_rules};
