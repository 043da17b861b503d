//! GitHub Actions integration: inputs from `INPUT_*` variables and outputs
//! through the `GITHUB_OUTPUT` file.

mod error;
mod inputs;
mod outputs;

pub use error::ActionError;
pub use inputs::{
    get_boolean_input, get_input, input_env_name, ActionInputs, DEFAULT_LABELS,
    DEFAULT_TODO_FILE_PATH,
};
pub use outputs::{
    ActionOutputs, ISSUES_CREATED_OUTPUT, ISSUE_URLS_OUTPUT, OUTPUT_FILE_ENV,
};
