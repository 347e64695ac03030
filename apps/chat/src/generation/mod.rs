// Resume generation: request parsing and the pluggable generator.
// The shipped generator is a stub returning a fixed resume; the trait
// exists so a real backend can slot in behind the same object.

pub mod generator;
pub mod request;
