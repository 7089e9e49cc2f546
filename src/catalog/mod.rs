//! Static reference tables consumed by the scoring pipeline
//!
//! Everything in this module is fixed at build time and read-only at runtime:
//! the aptitude question bank, the interest keyword table, the skill category
//! lists, the career catalog, and the skill gap table.

pub mod aptitude;
pub mod careers;
pub mod interests;
pub mod skills;
