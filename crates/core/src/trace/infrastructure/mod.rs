pub mod json_trace_reader;
