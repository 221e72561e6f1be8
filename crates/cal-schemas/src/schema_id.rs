//! `SchemaId`: memoized factory keyed by calendar identifier.
//!
//! Schemas are stateless, so every identifier maps to one `'static`
//! instance.  The matching pre-validators are built once, on first use.

use std::fmt;
use std::str::FromStr;

use cal_core::define_singleton;
use cal_core::errors::{Error, Result};
use cal_core::utilities::data_parsers::normalize_identifier;

use crate::schema::CalendricalSchema;
use crate::schemas::*;
use crate::validation::{
    pre_validator_for, CalendricalPreValidator, DaysValidator, GregorianPreValidator,
    JulianPreValidator, YearsValidator,
};

/// Identifier of a built-in schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaId {
    /// [`GregorianSchema`].
    Gregorian,
    /// [`JulianSchema`].
    Julian,
    /// [`Coptic12Schema`].
    Coptic12,
    /// [`Coptic13Schema`].
    Coptic13,
    /// [`Egyptian12Schema`].
    Egyptian12,
    /// [`Egyptian13Schema`].
    Egyptian13,
    /// [`FrenchRepublican12Schema`].
    FrenchRepublican12,
    /// [`FrenchRepublican13Schema`].
    FrenchRepublican13,
    /// [`InternationalFixedSchema`].
    InternationalFixed,
    /// [`PositivistSchema`].
    Positivist,
    /// [`WorldSchema`].
    World,
    /// [`TropicaliaSchema`].
    Tropicalia,
    /// [`Tropicalia3031Schema`].
    Tropicalia3031,
    /// [`Tropicalia3130Schema`].
    Tropicalia3130,
    /// [`PaxSchema`].
    Pax,
    /// [`TabularIslamicSchema`].
    TabularIslamic,
    /// [`LunisolarSchema`].
    Lunisolar,
}

define_singleton!(
    PRE_VALIDATORS,
    Vec<Box<dyn CalendricalPreValidator>>,
    SchemaId::ALL.iter().map(|id| id.build_pre_validator()).collect()
);

impl SchemaId {
    /// All identifiers, in declaration order.
    pub const ALL: [SchemaId; 17] = [
        SchemaId::Gregorian,
        SchemaId::Julian,
        SchemaId::Coptic12,
        SchemaId::Coptic13,
        SchemaId::Egyptian12,
        SchemaId::Egyptian13,
        SchemaId::FrenchRepublican12,
        SchemaId::FrenchRepublican13,
        SchemaId::InternationalFixed,
        SchemaId::Positivist,
        SchemaId::World,
        SchemaId::Tropicalia,
        SchemaId::Tropicalia3031,
        SchemaId::Tropicalia3130,
        SchemaId::Pax,
        SchemaId::TabularIslamic,
        SchemaId::Lunisolar,
    ];

    /// Stable kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            SchemaId::Gregorian => "gregorian",
            SchemaId::Julian => "julian",
            SchemaId::Coptic12 => "coptic12",
            SchemaId::Coptic13 => "coptic13",
            SchemaId::Egyptian12 => "egyptian12",
            SchemaId::Egyptian13 => "egyptian13",
            SchemaId::FrenchRepublican12 => "french-republican12",
            SchemaId::FrenchRepublican13 => "french-republican13",
            SchemaId::InternationalFixed => "international-fixed",
            SchemaId::Positivist => "positivist",
            SchemaId::World => "world",
            SchemaId::Tropicalia => "tropicalia",
            SchemaId::Tropicalia3031 => "tropicalia3031",
            SchemaId::Tropicalia3130 => "tropicalia3130",
            SchemaId::Pax => "pax",
            SchemaId::TabularIslamic => "tabular-islamic",
            SchemaId::Lunisolar => "lunisolar",
        }
    }

    /// The schema instance.
    pub fn schema(&self) -> &'static dyn CalendricalSchema {
        match self {
            SchemaId::Gregorian => &GregorianSchema,
            SchemaId::Julian => &JulianSchema,
            SchemaId::Coptic12 => &Coptic12Schema,
            SchemaId::Coptic13 => &Coptic13Schema,
            SchemaId::Egyptian12 => &Egyptian12Schema,
            SchemaId::Egyptian13 => &Egyptian13Schema,
            SchemaId::FrenchRepublican12 => &FrenchRepublican12Schema,
            SchemaId::FrenchRepublican13 => &FrenchRepublican13Schema,
            SchemaId::InternationalFixed => &InternationalFixedSchema,
            SchemaId::Positivist => &PositivistSchema,
            SchemaId::World => &WorldSchema,
            SchemaId::Tropicalia => &TropicaliaSchema,
            SchemaId::Tropicalia3031 => &Tropicalia3031Schema,
            SchemaId::Tropicalia3130 => &Tropicalia3130Schema,
            SchemaId::Pax => &PaxSchema,
            SchemaId::TabularIslamic => &TabularIslamicSchema,
            SchemaId::Lunisolar => &LunisolarSchema,
        }
    }

    /// The pre-validator for the schema, built once per process.
    pub fn pre_validator(&self) -> &'static dyn CalendricalPreValidator {
        PRE_VALIDATORS[*self as usize].as_ref()
    }

    /// The validator for the schema's supported years.
    pub fn years_validator(&self) -> YearsValidator {
        YearsValidator::for_schema(self.schema())
    }

    /// The validator for the schema's supported days since epoch.
    pub fn days_validator(&self) -> DaysValidator {
        DaysValidator::for_schema(self.schema())
    }

    fn build_pre_validator(&self) -> Box<dyn CalendricalPreValidator> {
        match self {
            SchemaId::Gregorian => Box::new(GregorianPreValidator),
            SchemaId::Julian => Box::new(JulianPreValidator),
            _ => pre_validator_for(self.schema()),
        }
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemaId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_identifier(s);
        SchemaId::ALL
            .into_iter()
            .find(|id| id.name() == key)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown schema: {s:?}")))
    }
}
