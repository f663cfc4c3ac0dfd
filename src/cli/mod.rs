pub mod orchestration;
pub mod outputs;

pub use orchestration::{
    read_current_version, release_notes, release_notes_at_tag, run_release_workflow,
    Collaborators, ReleaseWorkflowArgs, WorkflowResult,
};
pub use outputs::RunOutputs;
