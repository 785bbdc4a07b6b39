//! Month-by-month interest comparison and product projections

mod state;
mod engine;
mod rows;
mod comparison;
mod diagnostics;

pub use state::CarryForward;
pub use engine::{ComparisonEngine, MonthlyComparison, CapitalBasis, ResolvedProduct};
pub use rows::{InterestRow, ProductRow, ProductTable, INTEREST_HEADERS, PRODUCT_HEADERS};
pub use comparison::compare_products;
pub use diagnostics::Diagnostic;
