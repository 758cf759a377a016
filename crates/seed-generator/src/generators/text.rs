//! Realistic text generators backed by the `fake` crate.

use crate::generators::identifier::generate_uuid_v4;
use fake::faker::address::en as address;
use fake::faker::company::en as company;
use fake::faker::internet::en as internet;
use fake::faker::lorem::en as lorem;
use fake::faker::name::en as name;
use fake::faker::phone_number::en as phone_number;
use fake::Fake;
use rand::Rng;

pub fn email<R: Rng>(rng: &mut R) -> String {
    internet::SafeEmail().fake_with_rng(rng)
}

pub fn first_name<R: Rng>(rng: &mut R) -> String {
    name::FirstName().fake_with_rng(rng)
}

pub fn last_name<R: Rng>(rng: &mut R) -> String {
    name::LastName().fake_with_rng(rng)
}

pub fn full_name<R: Rng>(rng: &mut R) -> String {
    name::Name().fake_with_rng(rng)
}

pub fn username<R: Rng>(rng: &mut R) -> String {
    internet::Username().fake_with_rng(rng)
}

pub fn phone<R: Rng>(rng: &mut R) -> String {
    phone_number::PhoneNumber().fake_with_rng(rng)
}

pub fn street_address<R: Rng>(rng: &mut R) -> String {
    let number: String = address::BuildingNumber().fake_with_rng(rng);
    let street: String = address::StreetName().fake_with_rng(rng);
    format!("{number} {street}")
}

pub fn city<R: Rng>(rng: &mut R) -> String {
    address::CityName().fake_with_rng(rng)
}

pub fn country<R: Rng>(rng: &mut R) -> String {
    address::CountryName().fake_with_rng(rng)
}

pub fn postal_code<R: Rng>(rng: &mut R) -> String {
    address::ZipCode().fake_with_rng(rng)
}

pub fn url<R: Rng>(rng: &mut R) -> String {
    let host = word(rng).to_lowercase();
    let suffix: String = internet::DomainSuffix().fake_with_rng(rng);
    format!("https://www.{host}.{suffix}")
}

/// Short capitalized title without trailing period.
pub fn title<R: Rng>(rng: &mut R) -> String {
    let sentence: String = lorem::Sentence(2..6).fake_with_rng(rng);
    sentence.trim_end_matches('.').to_string()
}

pub fn paragraph<R: Rng>(rng: &mut R) -> String {
    lorem::Paragraph(1..3).fake_with_rng(rng)
}

pub fn sentence<R: Rng>(rng: &mut R) -> String {
    lorem::Sentence(4..10).fake_with_rng(rng)
}

pub fn password<R: Rng>(rng: &mut R) -> String {
    internet::Password(12..20).fake_with_rng(rng)
}

pub fn uuid<R: Rng>(rng: &mut R) -> String {
    generate_uuid_v4(rng).to_string()
}

pub fn company_name<R: Rng>(rng: &mut R) -> String {
    company::CompanyName().fake_with_rng(rng)
}

pub fn word<R: Rng>(rng: &mut R) -> String {
    lorem::Word().fake_with_rng(rng)
}

/// Two to four lorem words, the fallback for unhinted strings.
pub fn phrase<R: Rng>(rng: &mut R) -> String {
    let words: Vec<String> = lorem::Words(2..5).fake_with_rng(rng);
    words.join(" ")
}
