pub mod brand;
pub mod dependent;
pub mod settings;

pub use brand::{Brand, BrandPatch, BrandStatus, BrandToken, DependentCounts, NewBrand};
pub use dependent::{DependentKind, DependentRecord, NewDependent, ResourceTotals};
pub use settings::SystemSettings;
