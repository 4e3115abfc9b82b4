// Output surfaces: CSV persistence of normalized batches and colored
// terminal rendering of duplicate reports.

pub mod csv;
pub mod terminal;
