// Tool implementations and the registry they plug into

pub mod chess;
pub mod toggl;

mod registry;

pub use registry::{
    json_schema_boolean, json_schema_integer, json_schema_object, json_schema_string, Tool,
    ToolRegistry,
};
