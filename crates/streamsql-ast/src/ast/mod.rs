pub mod expr;
pub mod literal;
pub mod node;
pub mod operator;
pub mod statement;
pub mod visitor;
pub mod walk;

#[cfg(test)]
mod tests;
