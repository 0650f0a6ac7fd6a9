use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRange {
    pub base: f64,
    pub spread: f64,
}

impl StatRange {
    const fn new(base: f64, spread: f64) -> Self {
        StatRange { base, spread }
    }

    /// `base + uniform[0, spread)`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.base + rng.gen_range(0.0..self.spread)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchetypeType {
    Scorer,
    PointGuard,
    BigMan,
    SmallForward,
}

#[derive(Debug, Clone, Copy)]
pub struct Archetype {
    pub archetype_type: ArchetypeType,
    pub position: &'static str,
    pub height: &'static str,
    pub weight: u16,
    pub points: StatRange,
    pub rebounds: StatRange,
    pub assists: StatRange,
    pub field_goal: StatRange,
    pub free_throw: StatRange,
    pub three_point: StatRange,
}

pub const ARCHETYPES: [Archetype; 4] = [
    Archetype {
        archetype_type: ArchetypeType::Scorer,
        position: "Shooting Guard",
        height: "6'6\"",
        weight: 220,
        points: StatRange::new(25.0, 10.0),
        rebounds: StatRange::new(4.0, 4.0),
        assists: StatRange::new(4.0, 3.0),
        field_goal: StatRange::new(42.0, 8.0),
        free_throw: StatRange::new(80.0, 10.0),
        three_point: StatRange::new(30.0, 10.0),
    },
    Archetype {
        archetype_type: ArchetypeType::PointGuard,
        position: "Point Guard",
        height: "6'3\"",
        weight: 200,
        points: StatRange::new(15.0, 10.0),
        rebounds: StatRange::new(3.0, 3.0),
        assists: StatRange::new(8.0, 4.0),
        field_goal: StatRange::new(45.0, 8.0),
        free_throw: StatRange::new(85.0, 10.0),
        three_point: StatRange::new(35.0, 10.0),
    },
    Archetype {
        archetype_type: ArchetypeType::BigMan,
        position: "Center",
        height: "7'0\"",
        weight: 280,
        points: StatRange::new(18.0, 8.0),
        rebounds: StatRange::new(10.0, 5.0),
        assists: StatRange::new(2.0, 2.0),
        field_goal: StatRange::new(50.0, 10.0),
        free_throw: StatRange::new(60.0, 20.0),
        three_point: StatRange::new(10.0, 20.0),
    },
    Archetype {
        archetype_type: ArchetypeType::SmallForward,
        position: "Small Forward",
        height: "6'8\"",
        weight: 240,
        points: StatRange::new(20.0, 10.0),
        rebounds: StatRange::new(6.0, 4.0),
        assists: StatRange::new(5.0, 3.0),
        field_goal: StatRange::new(46.0, 8.0),
        free_throw: StatRange::new(75.0, 15.0),
        three_point: StatRange::new(32.0, 8.0),
    },
];
