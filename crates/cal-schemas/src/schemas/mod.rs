//! Concrete schemas.
//!
//! Each schema is a stateless unit struct; its rules live in constants and
//! closed-form formulae.

mod epagomenal;

pub mod coptic;
pub mod egyptian;
pub mod french_republican;
pub mod gregorian;
pub mod international_fixed;
pub mod julian;
pub mod lunisolar;
pub mod pax;
pub mod positivist;
pub mod tabular_islamic;
pub mod tropicalia;
pub mod world;

pub use coptic::{Coptic12Schema, Coptic13Schema};
pub use egyptian::{Egyptian12Schema, Egyptian13Schema};
pub use french_republican::{FrenchRepublican12Schema, FrenchRepublican13Schema};
pub use gregorian::GregorianSchema;
pub use international_fixed::InternationalFixedSchema;
pub use julian::JulianSchema;
pub use lunisolar::LunisolarSchema;
pub use pax::PaxSchema;
pub use positivist::PositivistSchema;
pub use tabular_islamic::TabularIslamicSchema;
pub use tropicalia::{Tropicalia3031Schema, Tropicalia3130Schema, TropicaliaSchema};
pub use world::WorldSchema;
