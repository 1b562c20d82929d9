mod calling_code_set;

pub use calling_code_set::CallingCodeSet;
