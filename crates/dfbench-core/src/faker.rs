//! Synthetic person data in the en_US style.
//!
//! Each call samples independently: an email is not derived from any
//! generated name and an address is not tied to either.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adam", "Alexander", "Alicia", "Amanda", "Amy", "Andrew", "Angela",
    "Anthony", "Ashley", "Barbara", "Benjamin", "Brandon", "Brenda", "Brian", "Brittany",
    "Carl", "Carol", "Catherine", "Charles", "Christina", "Christopher", "Cynthia", "Daniel",
    "David", "Deborah", "Denise", "Diana", "Donald", "Edward", "Elizabeth", "Emily", "Eric",
    "Erin", "Frank", "Gabriel", "Gary", "George", "Gregory", "Hannah", "Heather", "Henry",
    "Holly", "Ian", "Isaac", "Jacob", "James", "Jamie", "Jason", "Jennifer", "Jessica", "John",
    "Joseph", "Julie", "Karen", "Katherine", "Kelly", "Kevin", "Kimberly", "Kyle", "Laura",
    "Lauren", "Linda", "Lisa", "Mark", "Mary", "Matthew", "Megan", "Melissa", "Michael",
    "Michelle", "Nancy", "Natalie", "Nathan", "Nicholas", "Nicole", "Olivia", "Oscar",
    "Patricia", "Patrick", "Paul", "Peter", "Quentin", "Rachel", "Rebecca", "Richard", "Robert",
    "Ronald", "Ryan", "Samantha", "Samuel", "Sandra", "Sarah", "Scott", "Stephanie", "Steven",
    "Susan", "Teresa", "Thomas", "Timothy", "Tyler", "Ursula", "Valerie", "Victoria", "Walter",
    "William", "Xavier", "Yolanda", "Zachary",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Allen", "Anderson", "Baker", "Bell", "Brown", "Campbell", "Carter", "Clark",
    "Collins", "Cook", "Davis", "Diaz", "Edwards", "Evans", "Fisher", "Flores", "Garcia",
    "Gomez", "Gonzalez", "Green", "Hall", "Harris", "Hernandez", "Hill", "Jackson", "Johnson",
    "Jones", "Kelly", "King", "Lee", "Lewis", "Lopez", "Martin", "Martinez", "Miller",
    "Mitchell", "Moore", "Morgan", "Murphy", "Nelson", "Nguyen", "Parker", "Perez", "Phillips",
    "Ramirez", "Reed", "Rivera", "Roberts", "Robinson", "Rodriguez", "Sanchez", "Scott",
    "Smith", "Stewart", "Taylor", "Thomas", "Thompson", "Torres", "Turner", "Walker", "White",
    "Williams", "Wilson", "Wright", "Young",
];

const PREFIXES: &[&str] = &["Dr.", "Mr.", "Mrs.", "Ms.", "Miss"];

const SUFFIXES: &[&str] = &["MD", "DDS", "PhD", "DVM", "Jr.", "II"];

const FREE_EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com"];

const TLDS: &[&str] = &["com", "com", "com", "net", "org", "biz", "info"];

const STREET_SUFFIXES: &[&str] = &[
    "Avenue", "Branch", "Bridge", "Circle", "Course", "Court", "Crossing", "Drive", "Estates",
    "Ferry", "Gardens", "Highway", "Hills", "Lake", "Lane", "Loop", "Manor", "Mill", "Parkway",
    "Pass", "Place", "Ridge", "Road", "Route", "Square", "Station", "Street", "Summit",
    "Terrace", "Trail", "Valley", "View", "Way",
];

const CITY_PREFIXES: &[&str] = &["North", "East", "West", "South", "New", "Lake", "Port"];

const CITY_SUFFIXES: &[&str] = &[
    "town", "ton", "land", "ville", "berg", "burgh", "borough", "bury", "view", "port", "mouth",
    "stad", "furt", "chester", "fort", "haven", "side", "shire",
];

const STATE_ABBRS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

/// Fake-data source over any random number generator.
pub struct Faker<R: Rng> {
    rng: R,
}

impl<R: Rng> Faker<R> {
    /// Create a faker drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform integer in `min..=max`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Full name, usually `First Last`, sometimes with a title or suffix.
    pub fn name(&mut self) -> String {
        let first = self.pick(FIRST_NAMES);
        let last = self.pick(LAST_NAMES);
        // Per-mille weights: plain 970, prefix 15, suffix 10, both 5.
        match self.rng.random_range(0..1000) {
            0..=969 => format!("{first} {last}"),
            970..=984 => format!("{} {first} {last}", self.pick(PREFIXES)),
            985..=994 => format!("{first} {last} {}", self.pick(SUFFIXES)),
            _ => format!(
                "{} {first} {last} {}",
                self.pick(PREFIXES),
                self.pick(SUFFIXES)
            ),
        }
    }

    /// Email address at a free provider or at a surname domain.
    pub fn email(&mut self) -> String {
        let user = self.user_name();
        let domain = if self.rng.random_bool(0.5) {
            self.pick(FREE_EMAIL_DOMAINS).to_string()
        } else {
            format!(
                "{}.{}",
                self.pick(LAST_NAMES).to_lowercase(),
                self.pick(TLDS)
            )
        };
        format!("{user}@{domain}")
    }

    /// Two-line postal address: street line, then `City, ST 12345`.
    pub fn address(&mut self) -> String {
        let street = self.street_address();
        let city = self.city();
        let state = self.pick(STATE_ABBRS);
        let postcode = self.digits(5);
        format!("{street}\n{city}, {state} {postcode}")
    }

    fn user_name(&mut self) -> String {
        let first = self.pick(FIRST_NAMES).to_lowercase();
        let last = self.pick(LAST_NAMES).to_lowercase();
        match self.rng.random_range(0..4) {
            0 => format!("{last}.{first}"),
            1 => format!("{first}.{last}"),
            2 => format!("{first}{}", self.digits(2)),
            _ => format!("{}{last}", &first[..1]),
        }
    }

    fn street_address(&mut self) -> String {
        let width = self.rng.random_range(3..=5);
        let number = self.building_number(width);
        let base = if self.rng.random_bool(0.5) {
            self.pick(FIRST_NAMES)
        } else {
            self.pick(LAST_NAMES)
        };
        let suffix = self.pick(STREET_SUFFIXES);
        match self.rng.random_range(0..4) {
            0 => format!("{number} {base} {suffix} Apt. {}", self.digits(3)),
            1 => format!("{number} {base} {suffix} Suite {}", self.digits(3)),
            _ => format!("{number} {base} {suffix}"),
        }
    }

    fn city(&mut self) -> String {
        let prefix = self.pick(CITY_PREFIXES);
        let suffix = self.pick(CITY_SUFFIXES);
        let first = self.pick(FIRST_NAMES);
        match self.rng.random_range(0..4) {
            0 => format!("{prefix} {first}{suffix}"),
            1 => format!("{prefix} {first}"),
            2 => format!("{first}{suffix}"),
            _ => format!("{}{suffix}", self.pick(LAST_NAMES)),
        }
    }

    /// Number of `width` digits without a leading zero.
    fn building_number(&mut self, width: u32) -> String {
        let low = 10_i64.pow(width - 1);
        self.rng.random_range(low..low * 10).to_string()
    }

    /// `width` digits, leading zeros allowed.
    fn digits(&mut self, width: usize) -> String {
        (0..width)
            .map(|_| char::from(b'0' + self.rng.random_range(0..10u8)))
            .collect()
    }

    fn pick(&mut self, items: &'static [&'static str]) -> &'static str {
        items[self.rng.random_range(0..items.len())]
    }
}
