//! Dialogue scripts spoken by the gameplay system.

pub(crate) const PEBBLE: &[&str] = &[
    "Ouch!",
    "You stubbed",
    "your toe on",
    "a pebble!!",
    "Lose 10 health.",
];

pub(crate) const HOLE: &[&str] = &["Oh no!", "", "You fell into", "a hole!", "Lose 10 health."];

pub(crate) const POWER_UP: &[&str] = &["Yay!", "", "You found", "...", "a power-up!", "Gain 5 health."];

pub(crate) const MUSHROOM: &[&str] = &[
    "Yay!",
    "",
    "You found",
    "...",
    "a mushroom!",
    "Gain 10 health.",
];

pub(crate) const MAX_HEALTH: &[&str] = &["Already at", "max health."];

pub(crate) const TELEPORT_ON: &[&str] = &[
    "Teleporting mode",
    "activated.",
    "You can now move",
    "4 tiles at once.",
];

pub(crate) const TELEPORT_OFF: &[&str] = &[
    "Teleporting mode",
    "deactivated.",
    "You now walk at",
    "normal speed.",
];

pub(crate) const RAMBLIN_ON: &[&str] = &[
    "Ramblin' mode",
    "activated.",
    "You can now walk",
    "through walls",
];

pub(crate) const RAMBLIN_OFF: &[&str] = &[
    "Ramblin' mode",
    "deactivated.",
    "You cannot walk",
    "through walls",
];

pub(crate) const NPC_REMINDER: &[&str] = &[
    "Please don't",
    "make me say",
    "the whole speech",
    "again.",
    "Defeat Buzz,",
    "then you will",
    "get the keys",
    "to the Wreck car.",
];

pub(crate) const NPC_REWARD: &[&str] = &[
    "Congrats!",
    "You defeated",
    "the all-powerful",
    "Wizard Buzz!",
    "Your reward...",
    "The keys",
    "to the",
    "Ramblin Wreck!",
];

pub(crate) const NPC_QUEST: &[&str] = &[
    "Hello there!",
    "How can I help ya",
    "You wish to drive",
    "the what...?",
    "Ramblin Wreck?!",
    "",
    "Hmmmm....",
    "Let's see...",
    "Well first...",
    "you need keys!",
    "In order to get",
    "the key to that",
    "ancient car,",
    "you must prove",
    "yourself worthy.",
    "You must be",
    "brave, smart,",
    "and determined.",
    "You must defeat",
    "Wizard Buzz!",
    "Only then, will",
    "you receive the",
    "famous keys.",
    "Here's a tip:",
    "fire is Buzz's",
    "greatest enemy.",
    "Oh and watch out",
    "for items that",
    "might hurt you",
    "and keep an eye",
    "out for power-ups.",
    "Good luck,",
    "brave stranger.",
];

pub(crate) const DOOR_LOCKED: &[&str] = &[
    "Ramblin Wreck",
    "car is on the",
    "other side of",
    "this locked door",
];

pub(crate) const CAVE_ENTER: &[&str] = &["You are about to", "enter the portal", "to Buzz's cave..."];

pub(crate) const CAVE_CURIOUS: &[&str] = &[
    "Hmmm...",
    "what an",
    "interesting",
    "cave...",
    "You might",
    "want to try",
    "talking to",
    "someone more",
    "knowledgeable..",
];

pub(crate) const SECRET_DOOR: &[&str] = &[
    "You have found",
    "the secret door",
    "Now entering the",
    "secret map.",
];

pub(crate) const CAVE_EXIT: &[&str] = &["You are about to", "take the portal", "out of the cave"];

pub(crate) const SECRET_EXIT: &[&str] = &["You are about to", "take the door", "back to the", "main map."];

pub(crate) const GIFT_BOX: &[&str] = &[
    "You found a",
    "gift box!",
    "Opening box",
    "....",
    "A brand new",
    "hat has been",
    "equipped!",
];

pub(crate) const WATER_EQUIPPED: &[&str] = &["WATER spell", "equipped."];
pub(crate) const WATER_ALREADY: &[&str] = &["WATER spell", "already equipped"];
pub(crate) const FIRE_EQUIPPED: &[&str] = &["FIRE spell", "equipped."];
pub(crate) const FIRE_ALREADY: &[&str] = &["FIRE spell", "already equipped"];
pub(crate) const EARTH_EQUIPPED: &[&str] = &["EARTH spell", "equipped."];
pub(crate) const EARTH_ALREADY: &[&str] = &["EARTH spell", "already equipped"];

pub(crate) const BUZZ_WATER: &[&str] = &[
    "Press button to",
    "cast water spell.",
    "Water spell cast",
    "...",
    "That spell made",
    "Buzz very angry.",
    "Damage: 25",
    "Try another one.",
];

pub(crate) const BUZZ_EARTH: &[&str] = &[
    "Press button to",
    "cast earth spell.",
    "Earth spell cast",
    "...",
    "Spell was not",
    "effective at all.",
    "Damage: 15",
];

pub(crate) const BUZZ_FIRE: &[&str] = &[
    "Press button to",
    "cast fire spell.",
    "Fire spell cast",
    "...",
    "Success!",
    "",
    "Wizard Buzz",
    "defeated.",
    "Return to the one",
    "who gave you",
    "your quest to",
    "receive the key.",
];

pub(crate) const BUZZ_NO_SPELL: &[&str] = &["No spell", "equipped.", "Damage: 5"];

pub(crate) const CONFIGURATION: &[&str] = &["Showing game", "configuration..."];

pub(crate) const EQUIPPED: &str = "equipped";
pub(crate) const NONE: &str = "none";
