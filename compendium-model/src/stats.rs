/// The six ability scores shared by characters and monsters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityScores {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl AbilityScores {
    /// Score lookup by full or three-letter name.
    pub fn get(&self, name: &str) -> Option<u8> {
        match name {
            "strength" | "str" => Some(self.strength),
            "dexterity" | "dex" => Some(self.dexterity),
            "constitution" | "con" => Some(self.constitution),
            "intelligence" | "int" => Some(self.intelligence),
            "wisdom" | "wis" => Some(self.wisdom),
            "charisma" | "cha" => Some(self.charisma),
            _ => None,
        }
    }

    /// Standard 5e modifier, `floor((score - 10) / 2)`.
    pub fn modifier(score: u8) -> i8 {
        ((i16::from(score) - 10).div_euclid(2)) as i8
    }
}
