//! Message text shown on cave and dungeon text floors.
//!
//! Each message is a list of display lines, at most 12 characters per line
//! so it fits a text floor's 12-column interior. A table entry with several
//! messages keeps its alternates for callers that cycle them; only the first
//! is rendered.

pub type Message = &'static [&'static str];

pub static CAVE_ITEM_TAKE_THIS: Message = &["DANGEROUS!", "TAKE THIS"];
pub static CAVE_ITEM_MASTER_USING: Message = &["MASTER USING", "IT AND YOU"];
pub static CAVE_ITEM_SHOW_THIS: Message = &["SHOW THIS TO", "OLD WOMAN"];
pub static CAVE_TAKE_ANY: Message = &["TAKE ANY ONE", "YOU WANT"];
pub static CAVE_TAKE_ROAD: Message = &["TAKE A ROAD", "YOU WANT"];
pub static CAVE_SECRET_TREE: Message = &["SECRET IS IN", "THE TREE"];
pub static CAVE_MEET_GRAVE: Message = &["MEET ME AT", "THE GRAVE"];
pub static CAVE_SECRET_EVERYBODY: Message = &["ITS A SECRET", "TO EVERYBODY"];
pub static CAVE_SHOP_BUY_MEDICINE: Message = &["BUY MEDICINE", "BEFORE GOING"];
pub static CAVE_SHOP_EXPENSIVE: Message = &["BOY THIS IS", "EXPENSIVE!"];
pub static CAVE_SHOP_BUY_SOMETHIN: Message = &["BUY SOMETHIN", "WILL YA!"];
pub static CAVE_LETS_PLAY: Message = &["LET'S PLAY", "MONEY GAME"];
pub static CAVE_DOOR_REPAIR: Message = &["PAY FOR THE", "DOOR REPAIR"];
pub static CAVE_PAY_TALK: Message = &["PAY ME AND", "I'LL TALK"];
pub static CAVE_AINT_ENOUGH: Message = &["THIS AIN'T", "ENOUGH PAY"];
pub static CAVE_UP_UP: Message = &["GO UP UP THE", "MOUNTAIN"];
pub static CAVE_YOURE_RICH: Message = &["BOY YOU'RE", "RICH!"];
pub static CAVE_MAZE: Message = &["NORTH WEST", "SOUTH WEST"];

pub static DUNGEON_WALK_WATERFALL: Message = &["WALK INTO", "A WATERFALL"];
pub static DUNGEON_FAIRIES_DONT: Message = &["NO SECRETS", "SANS FAIRIES"];
pub static DUNGEON_SECRET_ARROW: Message = &["SECRET IN", "THE ARROW"];
pub static DUNGEON_MORE_BOMBS: Message = &["WANT TO HAVE", "MORE BOMBS?"];
pub static DUNGEON_DODONGO_SMOKE: Message = &["DODONGO", "HATES SMOKE"];
pub static DUNGEON_SWORD_WATERFALL: Message = &["SWORD AT THE", "WATERFALL"];
pub static DUNGEON_EASTMOST_SECRET: Message = &["EASTMOST", "PENNINSULA"];
pub static DUNGEON_DIGDOGGER_HATES: Message = &["DIGDOGGER", "HATES SOUND"];
pub static DUNGEON_GOHMA_EYES: Message = &["AIM AT THE", "GOHMA EYES"];
pub static DUNGEON_SKULL_SECRET: Message = &["SKULL EYES", "HIDE SECRETS"];
pub static DUNGEON_NEXT_ROOM: Message = &["GO TO THE", "NEXT ROOM"];
pub static DUNGEON_GRUMBLE: Message = &["GRUMBLE", "GRUMBLE"];
pub static DUNGEON_10TH_ENEMY: Message = &["10TH ENEMY", "HAS THE BOMB"];
pub static DUNGEON_SPECTACLE_ROCK: Message = &["SPECTACLE", "ROCK ENTRY"];
pub static DUNGEON_PATRA_MAP: Message = &["PATRA HAS", "THE MAP"];
pub static DUNGEON_TIP_NOSE: Message = &["SECRET IN", "THE NOSE TIP"];
pub static DUNGEON_HAVE_TRIFORCE: Message = &["BRING THE", "TRIFORCE"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_fits_a_text_floor() {
        let all: &[Message] = &[
            CAVE_ITEM_TAKE_THIS,
            CAVE_ITEM_MASTER_USING,
            CAVE_ITEM_SHOW_THIS,
            CAVE_TAKE_ANY,
            CAVE_TAKE_ROAD,
            CAVE_SECRET_TREE,
            CAVE_MEET_GRAVE,
            CAVE_SECRET_EVERYBODY,
            CAVE_SHOP_BUY_MEDICINE,
            CAVE_SHOP_EXPENSIVE,
            CAVE_SHOP_BUY_SOMETHIN,
            CAVE_LETS_PLAY,
            CAVE_DOOR_REPAIR,
            CAVE_PAY_TALK,
            CAVE_AINT_ENOUGH,
            CAVE_UP_UP,
            CAVE_YOURE_RICH,
            CAVE_MAZE,
            DUNGEON_WALK_WATERFALL,
            DUNGEON_FAIRIES_DONT,
            DUNGEON_SECRET_ARROW,
            DUNGEON_MORE_BOMBS,
            DUNGEON_DODONGO_SMOKE,
            DUNGEON_SWORD_WATERFALL,
            DUNGEON_EASTMOST_SECRET,
            DUNGEON_DIGDOGGER_HATES,
            DUNGEON_GOHMA_EYES,
            DUNGEON_SKULL_SECRET,
            DUNGEON_NEXT_ROOM,
            DUNGEON_GRUMBLE,
            DUNGEON_10TH_ENEMY,
            DUNGEON_SPECTACLE_ROCK,
            DUNGEON_PATRA_MAP,
            DUNGEON_TIP_NOSE,
            DUNGEON_HAVE_TRIFORCE,
        ];
        for message in all {
            assert!(!message.is_empty());
            for line in *message {
                assert!(line.len() <= 12, "line too wide: {:?}", line);
            }
        }
    }
}
