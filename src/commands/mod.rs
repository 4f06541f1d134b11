pub mod digest;
pub mod dump_ast;
