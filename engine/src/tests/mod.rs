
// Parser tests
mod parsing;


// Session tests
mod session;
