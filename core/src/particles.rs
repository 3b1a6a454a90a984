pub const PARTICLE_COUNT: usize = 80;

pub const PARTICLE_GLYPHS: &[&str] = &[
    "0", "1", "ア", "イ", "ウ", "エ", "オ", "カ", "キ", "ク", "ケ", "コ", "サ", "シ", "ス", "セ",
    "ソ", "タ", "チ", "ツ", "テ", "ト", "ナ", "ニ", "ヌ", "ネ", "ノ", "ハ", "ヒ", "フ", "ヘ",
    "ホ", "マ", "ミ", "ム", "メ", "モ", "ヤ", "ユ", "ヨ", "ラ", "リ", "ル", "レ", "ロ", "ワ",
    "ヲ", "ン",
];

pub const PARTICLE_STYLES: &[&str] = &[
    "animate-matrix-fall",
    "animate-matrix-fall-fast",
    "animate-matrix-fall-slow",
    "animate-matrix-fall-medium",
];

pub const PARTICLE_DELAY_MIN_S: f64 = 0.0;
pub const PARTICLE_DELAY_MAX_S: f64 = 8.0;
pub const PARTICLE_DURATION_MIN_S: f64 = 2.0;
pub const PARTICLE_DURATION_MAX_S: f64 = 6.0;

const SALT_X: u64 = 0x5C12_0711;
const SALT_DELAY: u64 = 0xDE1A_FEED;
const SALT_DURATION: u64 = 0xD012_A710;
const SALT_GLYPH: u64 = 0x617B_9A55;
const SALT_STYLE: u64 = 0x57E1_E0F5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub id: usize,
    pub x_percent: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub glyph: &'static str,
    pub style: &'static str,
}

pub fn particle_field(count: usize, seed: u64) -> Vec<ParticleSpec> {
    (0..count).map(|id| particle_spec(id, seed)).collect()
}

fn particle_spec(id: usize, seed: u64) -> ParticleSpec {
    let base = splitmix64(seed ^ (id as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15));
    ParticleSpec {
        id,
        x_percent: rand_range(base, SALT_X, 0.0, 100.0),
        delay_s: rand_range(base, SALT_DELAY, PARTICLE_DELAY_MIN_S, PARTICLE_DELAY_MAX_S),
        duration_s: rand_range(
            base,
            SALT_DURATION,
            PARTICLE_DURATION_MIN_S,
            PARTICLE_DURATION_MAX_S,
        ),
        glyph: pick(PARTICLE_GLYPHS, base, SALT_GLYPH),
        style: pick(PARTICLE_STYLES, base, SALT_STYLE),
    }
}

fn pick(table: &'static [&'static str], seed: u64, salt: u64) -> &'static str {
    // rand_unit is strictly below 1.0, so the index stays in range.
    let index = (rand_unit(seed, salt) * table.len() as f64) as usize;
    table[index]
}

pub fn splitmix64(mut value: u64) -> u64 {
    value = value.wrapping_add(0x9e3779b97f4a7c15);
    let mut z = value;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

pub fn rand_unit(seed: u64, salt: u64) -> f64 {
    let mixed = splitmix64(seed ^ salt);
    let top = mixed >> 11;
    top as f64 / ((1u64 << 53) as f64)
}

pub fn rand_range(seed: u64, salt: u64, min: f64, max: f64) -> f64 {
    min + (max - min) * rand_unit(seed, salt)
}
