pub mod content_workflow;
