//! Curated synonym table shipped with the engine.
//!
//! Generic ingredients come first and vendor koji products last, so a product
//! name such as "MUROの塩麹" normalizes to its base seasoning. The resolver
//! still reaches the product itself by searching on the raw name.

use crate::domain::ingredient_alias::entities::AliasEntry;

const BUILTIN_ALIASES: &[(&[&str], &str)] = &[
    // meat
    (
        &["豚バラ", "豚ばら", "豚バラ肉", "ぶたばら", "ブタバラ", "pork belly"],
        "豚肉 ばら",
    ),
    (
        &["豚もも", "豚モモ", "豚もも肉", "ぶたもも", "pork loin"],
        "豚肉 もも",
    ),
    (
        &["鶏むね", "鶏胸", "鶏むね肉", "鶏胸肉", "とりむね", "chicken breast"],
        "鶏肉 むね",
    ),
    (
        &["鶏もも", "鶏モモ", "鶏もも肉", "とりもも", "chicken thigh"],
        "鶏肉 もも",
    ),
    // seafood
    (&["鮭", "サケ", "さけ", "生鮭", "salmon"], "さけ 生"),
    (&["鯖", "サバ", "さば", "生鯖", "mackerel"], "さば 生"),
    (&["海老", "エビ", "えび", "shrimp"], "えび"),
    // vegetables
    (
        &["玉ねぎ", "タマネギ", "たまねぎ", "玉葱", "onion"],
        "たまねぎ",
    ),
    (
        &["人参", "にんじん", "ニンジン", "胡蘿蔔", "carrot"],
        "にんじん",
    ),
    (&["じゃがいも", "ジャガイモ", "馬鈴薯", "potato"], "じゃがいも"),
    (&["トマト", "tomato", "とまと"], "トマト"),
    (&["キャベツ", "cabbage", "きゃべつ"], "キャベツ"),
    (
        &["ほうれん草", "ホウレンソウ", "ほうれんそう", "spinach"],
        "ほうれんそう",
    ),
    (&["大根", "だいこん", "ダイコン", "daikon"], "だいこん"),
    // mushrooms
    (&["しめじ", "シメジ", "ぶなしめじ", "ブナシメジ"], "しめじ"),
    (&["椎茸", "シイタケ", "しいたけ", "shiitake"], "しいたけ"),
    (
        &["えのき", "エノキ", "えのきたけ", "エノキタケ"],
        "えのきたけ",
    ),
    // seasonings
    (&["醤油", "しょうゆ", "ショウユ", "soy sauce"], "醤油"),
    (&["味噌", "みそ", "ミソ", "miso"], "みそ"),
    (&["砂糖", "さとう", "サトウ", "sugar"], "砂糖"),
    (&["塩", "しお", "シオ", "salt"], "食塩"),
    (&["酢", "す", "ス", "vinegar"], "穀物酢"),
    // koji products
    (
        &["塩麹", "しおこうじ", "シオコウジ", "塩こうじ", "MURO塩麹", "MUROの塩麹"],
        "MUROの塩麹",
    ),
    (
        &[
            "醤油麹",
            "しょうゆこうじ",
            "ショウユコウジ",
            "醤油こうじ",
            "MURO醤油麹",
            "MUROの醤油麹",
        ],
        "MUROの醤油麹",
    ),
    (
        &[
            "にんにく麹",
            "ニンニク麹",
            "にんにくこうじ",
            "MUROにんにく麹",
            "MUROのにんにく麹",
        ],
        "MUROのにんにく麹",
    ),
    (
        &["米麹", "こめこうじ", "コメコウジ", "米こうじ", "MURO米麹", "MUROの米麹"],
        "MUROの米麹",
    ),
];

pub fn entries() -> Vec<AliasEntry> {
    BUILTIN_ALIASES
        .iter()
        .map(|(variations, canonical)| AliasEntry::new(variations.iter().copied(), *canonical))
        .collect()
}
