/// Product identifiers are 1-based and assigned sequentially by the repository.
pub type ProductId = i64;
