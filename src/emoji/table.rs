//! Built-in emoji table: Slack short name to hyphen-joined unified code points.
//!
//! A subset of the emoji-data catalogue covering the short names that
//! show up in everyday messages. Callers needing more add them through
//! `Options::custom_emoji`, which takes precedence over this table.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// `(short_name, unified)` pairs. A value may also be `alias:<short_name>`.
pub static EMOJI: &[(&str, &str)] = &[
    // Faces
    ("grinning", "1F600"),
    ("smiley", "1F603"),
    ("smile", "1F604"),
    ("grin", "1F601"),
    ("laughing", "1F606"),
    ("satisfied", "alias:laughing"),
    ("sweat_smile", "1F605"),
    ("joy", "1F602"),
    ("rolling_on_the_floor_laughing", "1F923"),
    ("slightly_smiling_face", "1F642"),
    ("upside_down_face", "1F643"),
    ("wink", "1F609"),
    ("blush", "1F60A"),
    ("innocent", "1F607"),
    ("heart_eyes", "1F60D"),
    ("kissing_heart", "1F618"),
    ("kissing", "1F617"),
    ("yum", "1F60B"),
    ("stuck_out_tongue", "1F61B"),
    ("stuck_out_tongue_winking_eye", "1F61C"),
    ("stuck_out_tongue_closed_eyes", "1F61D"),
    ("money_mouth_face", "1F911"),
    ("hugging_face", "1F917"),
    ("thinking_face", "1F914"),
    ("zipper_mouth_face", "1F910"),
    ("neutral_face", "1F610"),
    ("expressionless", "1F611"),
    ("no_mouth", "1F636"),
    ("smirk", "1F60F"),
    ("unamused", "1F612"),
    ("face_with_rolling_eyes", "1F644"),
    ("grimacing", "1F62C"),
    ("relieved", "1F60C"),
    ("pensive", "1F614"),
    ("sleepy", "1F62A"),
    ("sleeping", "1F634"),
    ("mask", "1F637"),
    ("nerd_face", "1F913"),
    ("sunglasses", "1F60E"),
    ("confused", "1F615"),
    ("worried", "1F61F"),
    ("slightly_frowning_face", "1F641"),
    ("open_mouth", "1F62E"),
    ("hushed", "1F62F"),
    ("astonished", "1F632"),
    ("flushed", "1F633"),
    ("fearful", "1F628"),
    ("cold_sweat", "1F630"),
    ("cry", "1F622"),
    ("sob", "1F62D"),
    ("scream", "1F631"),
    ("confounded", "1F616"),
    ("persevere", "1F623"),
    ("disappointed", "1F61E"),
    ("sweat", "1F613"),
    ("weary", "1F629"),
    ("tired_face", "1F62B"),
    ("triumph", "1F624"),
    ("rage", "1F621"),
    ("angry", "1F620"),
    ("smiling_imp", "1F608"),
    ("imp", "1F47F"),
    ("skull", "1F480"),
    ("hankey", "1F4A9"),
    ("poop", "alias:hankey"),
    ("clown_face", "1F921"),
    ("ghost", "1F47B"),
    ("alien", "1F47D"),
    ("robot_face", "1F916"),
    ("smiley_cat", "1F63A"),
    ("see_no_evil", "1F648"),
    ("hear_no_evil", "1F649"),
    ("speak_no_evil", "1F64A"),
    // Hearts and symbols
    ("heart", "2764-FE0F"),
    ("broken_heart", "1F494"),
    ("yellow_heart", "1F49B"),
    ("green_heart", "1F49A"),
    ("blue_heart", "1F499"),
    ("purple_heart", "1F49C"),
    ("sparkling_heart", "1F496"),
    ("two_hearts", "1F495"),
    ("100", "1F4AF"),
    ("boom", "1F4A5"),
    ("zzz", "1F4A4"),
    ("speech_balloon", "1F4AC"),
    ("thought_balloon", "1F4AD"),
    // Hands
    ("wave", "1F44B"),
    ("raised_hand", "270B"),
    ("ok_hand", "1F44C"),
    ("v", "270C-FE0F"),
    ("crossed_fingers", "1F91E"),
    ("point_left", "1F448"),
    ("point_right", "1F449"),
    ("point_up_2", "1F446"),
    ("point_down", "1F447"),
    ("point_up", "261D-FE0F"),
    ("+1", "1F44D"),
    ("thumbsup", "alias:+1"),
    ("-1", "1F44E"),
    ("thumbsdown", "alias:-1"),
    ("fist", "270A"),
    ("facepunch", "1F44A"),
    ("punch", "alias:facepunch"),
    ("clap", "1F44F"),
    ("raised_hands", "1F64C"),
    ("open_hands", "1F450"),
    ("pray", "1F64F"),
    ("muscle", "1F4AA"),
    ("eyes", "1F440"),
    ("brain", "1F9E0"),
    // Celebration and weather
    ("tada", "1F389"),
    ("confetti_ball", "1F38A"),
    ("balloon", "1F388"),
    ("gift", "1F381"),
    ("trophy", "1F3C6"),
    ("sparkles", "2728"),
    ("star", "2B50"),
    ("star2", "1F31F"),
    ("fire", "1F525"),
    ("zap", "26A1"),
    ("sunny", "2600-FE0F"),
    ("cloud", "2601-FE0F"),
    ("umbrella", "2614"),
    ("snowflake", "2744-FE0F"),
    ("rainbow", "1F308"),
    ("ocean", "1F30A"),
    ("earth_americas", "1F30E"),
    // Travel
    ("rocket", "1F680"),
    ("airplane", "2708-FE0F"),
    ("car", "1F697"),
    ("bike", "1F6B2"),
    ("rotating_light", "1F6A8"),
    ("construction", "1F6A7"),
    ("house", "1F3E0"),
    ("office", "1F3E2"),
    ("hospital", "1F3E5"),
    ("checkered_flag", "1F3C1"),
    ("triangular_flag_on_post", "1F6A9"),
    // Food and drink
    ("coffee", "2615"),
    ("tea", "1F375"),
    ("beer", "1F37A"),
    ("beers", "1F37B"),
    ("wine_glass", "1F377"),
    ("pizza", "1F355"),
    ("hamburger", "1F354"),
    ("taco", "1F32E"),
    ("cake", "1F370"),
    ("birthday", "1F382"),
    ("cookie", "1F36A"),
    ("doughnut", "1F369"),
    ("apple", "1F34E"),
    ("banana", "1F34C"),
    ("avocado", "1F951"),
    // Animals and nature
    ("dog", "1F436"),
    ("cat", "1F431"),
    ("mouse", "1F42D"),
    ("rabbit", "1F430"),
    ("fox_face", "1F98A"),
    ("bear", "1F43B"),
    ("panda_face", "1F43C"),
    ("koala", "1F428"),
    ("tiger", "1F42F"),
    ("lion_face", "1F981"),
    ("cow", "1F42E"),
    ("pig", "1F437"),
    ("frog", "1F438"),
    ("monkey_face", "1F435"),
    ("chicken", "1F414"),
    ("penguin", "1F427"),
    ("bird", "1F426"),
    ("unicorn_face", "1F984"),
    ("bee", "1F41D"),
    ("bug", "1F41B"),
    ("snail", "1F40C"),
    ("octopus", "1F419"),
    ("crab", "1F980"),
    ("whale", "1F433"),
    ("dolphin", "1F42C"),
    ("fish", "1F41F"),
    ("turtle", "1F422"),
    ("snake", "1F40D"),
    ("cactus", "1F335"),
    ("evergreen_tree", "1F332"),
    ("deciduous_tree", "1F333"),
    ("palm_tree", "1F334"),
    ("seedling", "1F331"),
    ("herb", "1F33F"),
    ("four_leaf_clover", "1F340"),
    ("maple_leaf", "1F341"),
    ("mushroom", "1F344"),
    ("rose", "1F339"),
    ("sunflower", "1F33B"),
    ("tulip", "1F337"),
    // Marks and keycaps
    ("white_check_mark", "2705"),
    ("heavy_check_mark", "2714-FE0F"),
    ("x", "274C"),
    ("heavy_plus_sign", "2795"),
    ("heavy_minus_sign", "2796"),
    ("question", "2753"),
    ("exclamation", "2757"),
    ("warning", "26A0-FE0F"),
    ("no_entry", "26D4"),
    ("bangbang", "203C-FE0F"),
    ("interrobang", "2049-FE0F"),
    ("hash", "0023-FE0F-20E3"),
    ("zero", "0030-FE0F-20E3"),
    ("one", "0031-FE0F-20E3"),
    ("two", "0032-FE0F-20E3"),
    ("three", "0033-FE0F-20E3"),
    ("keycap_ten", "1F51F"),
    ("arrow_up", "2B06-FE0F"),
    ("arrow_down", "2B07-FE0F"),
    ("arrow_left", "2B05-FE0F"),
    ("arrow_right", "27A1-FE0F"),
    ("recycle", "267B-FE0F"),
    ("copyright", "00A9-FE0F"),
    ("registered", "00AE-FE0F"),
    ("tm", "2122-FE0F"),
    ("red_circle", "1F534"),
    ("large_blue_circle", "1F535"),
    ("white_circle", "26AA"),
    ("black_circle", "26AB"),
    // Objects
    ("lock", "1F512"),
    ("unlock", "1F513"),
    ("key", "1F511"),
    ("bell", "1F514"),
    ("mega", "1F4E3"),
    ("loudspeaker", "1F4E2"),
    ("bulb", "1F4A1"),
    ("memo", "1F4DD"),
    ("pencil2", "270F-FE0F"),
    ("book", "1F4D6"),
    ("books", "1F4DA"),
    ("bookmark", "1F516"),
    ("link", "1F517"),
    ("paperclip", "1F4CE"),
    ("pushpin", "1F4CC"),
    ("calendar", "1F4C6"),
    ("chart_with_upwards_trend", "1F4C8"),
    ("chart_with_downwards_trend", "1F4C9"),
    ("bar_chart", "1F4CA"),
    ("email", "1F4E7"),
    ("envelope", "2709-FE0F"),
    ("inbox_tray", "1F4E5"),
    ("outbox_tray", "1F4E4"),
    ("package", "1F4E6"),
    ("computer", "1F4BB"),
    ("keyboard", "2328-FE0F"),
    ("iphone", "1F4F1"),
    ("phone", "260E-FE0F"),
    ("hammer", "1F528"),
    ("wrench", "1F527"),
    ("gear", "2699-FE0F"),
    ("hourglass", "231B"),
    ("stopwatch", "23F1-FE0F"),
    ("alarm_clock", "23F0"),
    ("moneybag", "1F4B0"),
    ("dollar", "1F4B5"),
    ("heavy_dollar_sign", "1F4B2"),
    ("credit_card", "1F4B3"),
    ("gem", "1F48E"),
    ("crown", "1F451"),
    ("eyeglasses", "1F453"),
    // Activities
    ("soccer", "26BD"),
    ("basketball", "1F3C0"),
    ("football", "1F3C8"),
    ("tennis", "1F3BE"),
    ("video_game", "1F3AE"),
    ("dart", "1F3AF"),
    ("musical_note", "1F3B5"),
    ("notes", "1F3B6"),
    ("headphones", "1F3A7"),
    ("art", "1F3A8"),
    ("movie_camera", "1F3A5"),
    ("camera", "1F4F7"),
    ("tv", "1F4FA"),
];

/// Look up a built-in short name.
pub fn lookup(name: &str) -> Option<&'static str> {
    static INDEX: OnceLock<FxHashMap<&'static str, &'static str>> = OnceLock::new();
    INDEX
        .get_or_init(|| EMOJI.iter().copied().collect())
        .get(name)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("wave"), Some("1F44B"));
        assert_eq!(lookup("+1"), Some("1F44D"));
        assert_eq!(lookup("hash"), Some("0023-FE0F-20E3"));
        assert_eq!(lookup("no_such_emoji"), None);
    }

    #[test]
    fn test_short_names_unique() {
        let mut seen = FxHashSet::default();
        for (name, _) in EMOJI {
            assert!(seen.insert(*name), "duplicate short name {name}");
        }
    }

    #[test]
    fn test_values_well_formed() {
        for (name, value) in EMOJI {
            if let Some(target) = value.strip_prefix("alias:") {
                assert!(lookup(target).is_some(), "{name} aliases unknown {target}");
                continue;
            }
            for code in value.split('-') {
                assert!(
                    (4..=5).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_hexdigit()),
                    "{name} has malformed code {code}"
                );
            }
        }
    }
}
