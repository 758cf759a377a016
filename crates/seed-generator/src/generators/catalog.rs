//! Generator path catalog.
//!
//! Resolves `category.function` paths such as `person.firstName` or
//! `internet.email` to a generator. Lookup ignores case, `_` and `-`, so
//! `person.first_name` and `Person.FirstName` name the same entry. Several
//! legacy aliases (`name.*`, `address.*`, `datatype.*`) map to the same
//! generators as their modern counterparts.

use crate::generators::{identifier, numeric, text, timestamp};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use seed_core::SeedValue;

pub type CatalogGenerator = fn(&mut StdRng, DateTime<Utc>) -> SeedValue;

struct CatalogEntry {
    paths: &'static [&'static str],
    generate: CatalogGenerator,
}

macro_rules! text_entry {
    ($paths:expr, $func:path) => {
        CatalogEntry {
            paths: $paths,
            generate: |rng, _now| SeedValue::String($func(rng)),
        }
    };
}

const CATALOG: &[CatalogEntry] = &[
    text_entry!(&["person.firstname", "name.firstname"], text::first_name),
    text_entry!(&["person.lastname", "name.lastname"], text::last_name),
    text_entry!(
        &["person.fullname", "name.fullname", "name.findname", "person.name"],
        text::full_name
    ),
    text_entry!(&["internet.email", "internet.exampleemail"], text::email),
    text_entry!(&["internet.username", "internet.login"], text::username),
    text_entry!(&["internet.url"], text::url),
    text_entry!(&["internet.password"], text::password),
    text_entry!(&["phone.number", "phone.phonenumber"], text::phone),
    text_entry!(
        &["location.streetaddress", "address.streetaddress"],
        text::street_address
    ),
    text_entry!(&["location.city", "address.city"], text::city),
    text_entry!(&["location.country", "address.country"], text::country),
    text_entry!(
        &["location.zipcode", "address.zipcode", "location.postcode"],
        text::postal_code
    ),
    text_entry!(&["lorem.word"], text::word),
    text_entry!(&["lorem.words"], text::phrase),
    text_entry!(&["lorem.sentence"], text::sentence),
    text_entry!(&["lorem.paragraph", "lorem.text"], text::paragraph),
    text_entry!(&["company.name", "company.companyname"], text::company_name),
    CatalogEntry {
        paths: &["string.uuid", "datatype.uuid"],
        generate: |rng, _now| SeedValue::Uuid(identifier::generate_uuid_v4(rng)),
    },
    CatalogEntry {
        paths: &["number.int", "datatype.number"],
        generate: |rng, _now| numeric::generate_int_range(rng, 0, 1000),
    },
    CatalogEntry {
        paths: &["number.float", "datatype.float"],
        generate: |rng, _now| numeric::generate_decimal_range(rng, 0.0, 1000.0),
    },
    CatalogEntry {
        paths: &["commerce.price"],
        generate: |rng, _now| numeric::price(rng),
    },
    CatalogEntry {
        paths: &["datatype.boolean", "datatype.bool"],
        generate: |rng, _now| SeedValue::Bool(rng.gen_bool(0.5)),
    },
    CatalogEntry {
        paths: &["date.past"],
        generate: |rng, now| SeedValue::DateTime(timestamp::recent(rng, now, 365)),
    },
    CatalogEntry {
        paths: &["date.future"],
        generate: |rng, now| SeedValue::DateTime(timestamp::soon(rng, now, 365)),
    },
    CatalogEntry {
        paths: &["date.recent"],
        generate: |rng, now| SeedValue::DateTime(timestamp::recent(rng, now, 30)),
    },
    CatalogEntry {
        paths: &["date.birthdate"],
        generate: |rng, now| SeedValue::DateTime(timestamp::birthdate(rng, now)),
    },
];

fn normalize(path: &str) -> String {
    path.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Look up the generator for a path; `None` when the path is unknown.
pub fn lookup(path: &str) -> Option<CatalogGenerator> {
    let wanted = normalize(path);
    CATALOG
        .iter()
        .find(|entry| entry.paths.iter().any(|p| *p == wanted))
        .map(|entry| entry.generate)
}
