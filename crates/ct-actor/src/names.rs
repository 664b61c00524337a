//! Name pools.  Names are drawn uniformly; duplicates across actors are fine,
//! the id is what identifies an actor.

use ct_core::SimRng;

use crate::Sex;

pub const MALE_NAMES: [&str; 9] = [
    "Derek", "Franz", "Pablo", "Andrea", "Jacob", "Ayeye Brazov", "Natale", "Carlo", "Marcello",
];

pub const FEMALE_NAMES: [&str; 9] = [
    "Tina", "Dana", "Consuelo", "Dominica", "Aurora", "Paola", "Deana", "Masha", "Sandra",
];

pub const EVIL_NAMES: [&str; 10] = [
    "Gargamel", "Mangiafuoco", "Vlad", "Leech", "Frieza", "Koopa", "Goomba", "De Sade",
    "Darth Maul", "Blank Banshee",
];

/// A rider name from the pool matching `sex`.
pub fn rider_name(sex: Sex, rng: &mut SimRng) -> &'static str {
    let pool: &[&'static str] = match sex {
        Sex::Male   => &MALE_NAMES,
        Sex::Female => &FEMALE_NAMES,
    };
    pick(pool, rng)
}

/// An inspector name.
pub fn inspector_name(rng: &mut SimRng) -> &'static str {
    pick(&EVIL_NAMES, rng)
}

fn pick(pool: &[&'static str], rng: &mut SimRng) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}
