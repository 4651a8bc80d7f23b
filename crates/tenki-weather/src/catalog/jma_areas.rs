//! Japan Meteorological Agency forecast areas.
//!
//! Mirrors the `centers` and `offices` sections of
//! https://www.jma.go.jp/bosai/common/const/area.json. Forecast requests are
//! made per office; every office names its regional center as parent.

use super::{Catalog, CatalogEntry};
use crate::error::WeatherError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Area {
    pub code: &'static str,
    pub name: &'static str,
    pub en_name: &'static str,
    pub kana: &'static str,
    /// Parent area code, empty for centers
    pub parent: &'static str,
}

impl CatalogEntry for Area {
    fn id(&self) -> &'static str {
        self.code
    }

    fn display_name(&self) -> &'static str {
        self.name
    }

    fn parent_region(&self) -> &'static str {
        self.parent
    }
}

const fn area(
    code: &'static str,
    name: &'static str,
    en_name: &'static str,
    kana: &'static str,
    parent: &'static str,
) -> Area {
    Area {
        code,
        name,
        en_name,
        kana,
        parent,
    }
}

/// Default office selection.
pub const TOKYO: Area = area("130000", "東京都", "Tokyo", "とうきょうと", "010300");

pub static CENTERS: Catalog<Area> = Catalog::new("center", CENTER_ENTRIES);

pub static OFFICES: Catalog<Area> = Catalog::new("office", OFFICE_ENTRIES);

/// Regional center an office belongs to.
pub fn center_of(office: &Area) -> Result<&'static Area, WeatherError> {
    CENTERS.lookup(office.parent)
}

const CENTER_ENTRIES: &[Area] = &[
    area("010100", "北海道地方", "Hokkaido", "ほっかいどうちほう", ""),
    area("010200", "東北地方", "Tohoku", "とうほくちほう", ""),
    area("010300", "関東甲信地方", "Kanto Koshin", "かんとうこうしんちほう", ""),
    area("010400", "東海地方", "Tokai", "とうかいちほう", ""),
    area("010500", "北陸地方", "Hokuriku", "ほくりくちほう", ""),
    area("010600", "近畿地方", "Kinki", "きんきちほう", ""),
    area(
        "010700",
        "中国地方（山口県を除く）",
        "Chugoku (Excluding Yamaguchi)",
        "ちゅうごくちほう（やまぐちけんをのぞく）",
        "",
    ),
    area("010800", "四国地方", "Shikoku", "しこくちほう", ""),
    area(
        "010900",
        "九州北部地方（山口県を含む）",
        "Northern Kyushu (Including Yamaguchi)",
        "きゅうしゅうほくぶちほう（やまぐちけんをふくむ）",
        "",
    ),
    area(
        "011000",
        "九州南部・奄美地方",
        "Southern Kyushu and Amami",
        "きゅうしゅうなんぶ・あまみちほう",
        "",
    ),
    area("011100", "沖縄地方", "Okinawa", "おきなわちほう", ""),
];

const OFFICE_ENTRIES: &[Area] = &[
    area("011000", "宗谷地方", "Soya", "そうやちほう", "010100"),
    area("012000", "上川・留萌地方", "Kamikawa Rumoi", "かみかわ・るもいちほう", "010100"),
    area(
        "013000",
        "網走・北見・紋別地方",
        "Abashiri Kitami Mombetsu",
        "あばしり・きたみ・もんべつちほう",
        "010100",
    ),
    area("014030", "十勝地方", "Tokachi", "とかちちほう", "010100"),
    area("014100", "釧路・根室地方", "Kushiro Nemuro", "くしろ・ねむろちほう", "010100"),
    area("015000", "胆振・日高地方", "Iburi Hidaka", "いぶり・ひだかちほう", "010100"),
    area(
        "016000",
        "石狩・空知・後志地方",
        "Ishikari Sorachi Shiribeshi",
        "いしかり・そらち・しりべしちほう",
        "010100",
    ),
    area("017000", "渡島・檜山地方", "Oshima Hiyama", "おしま・ひやまちほう", "010100"),
    area("020000", "青森県", "Aomori", "あおもりけん", "010200"),
    area("030000", "岩手県", "Iwate", "いわてけん", "010200"),
    area("040000", "宮城県", "Miyagi", "みやぎけん", "010200"),
    area("050000", "秋田県", "Akita", "あきたけん", "010200"),
    area("060000", "山形県", "Yamagata", "やまがたけん", "010200"),
    area("070000", "福島県", "Fukushima", "ふくしまけん", "010200"),
    area("080000", "茨城県", "Ibaraki", "いばらきけん", "010300"),
    area("090000", "栃木県", "Tochigi", "とちぎけん", "010300"),
    area("100000", "群馬県", "Gunma", "ぐんまけん", "010300"),
    area("110000", "埼玉県", "Saitama", "さいたまけん", "010300"),
    area("120000", "千葉県", "Chiba", "ちばけん", "010300"),
    TOKYO,
    area("140000", "神奈川県", "Kanagawa", "かながわけん", "010300"),
    area("150000", "新潟県", "Niigata", "にいがたけん", "010500"),
    area("160000", "富山県", "Toyama", "とやまけん", "010500"),
    area("170000", "石川県", "Ishikawa", "いしかわけん", "010500"),
    area("180000", "福井県", "Fukui", "ふくいけん", "010500"),
    area("190000", "山梨県", "Yamanashi", "やまなしけん", "010300"),
    area("200000", "長野県", "Nagano", "ながのけん", "010300"),
    area("210000", "岐阜県", "Gifu", "ぎふけん", "010400"),
    area("220000", "静岡県", "Shizuoka", "しずおかけん", "010400"),
    area("230000", "愛知県", "Aichi", "あいちけん", "010400"),
    area("240000", "三重県", "Mie", "みえけん", "010400"),
    area("250000", "滋賀県", "Shiga", "しがけん", "010600"),
    area("260000", "京都府", "Kyoto", "きょうとふ", "010600"),
    area("270000", "大阪府", "Osaka", "おおさかふ", "010600"),
    area("280000", "兵庫県", "Hyogo", "ひょうごけん", "010600"),
    area("290000", "奈良県", "Nara", "ならけん", "010600"),
    area("300000", "和歌山県", "Wakayama", "わかやまけん", "010600"),
    area("310000", "鳥取県", "Tottori", "とっとりけん", "010700"),
    area("320000", "島根県", "Shimane", "しまねけん", "010700"),
    area("330000", "岡山県", "Okayama", "おかやまけん", "010700"),
    area("340000", "広島県", "Hiroshima", "ひろしまけん", "010700"),
    area("350000", "山口県", "Yamaguchi", "やまぐちけん", "010900"),
    area("360000", "徳島県", "Tokushima", "とくしまけん", "010800"),
    area("370000", "香川県", "Kagawa", "かがわけん", "010800"),
    area("380000", "愛媛県", "Ehime", "えひめけん", "010800"),
    area("390000", "高知県", "Kochi", "こうちけん", "010800"),
    area("400000", "福岡県", "Fukuoka", "ふくおかけん", "010900"),
    area("410000", "佐賀県", "Saga", "さがけん", "010900"),
    area("420000", "長崎県", "Nagasaki", "ながさきけん", "010900"),
    area("430000", "熊本県", "Kumamoto", "くまもとけん", "010900"),
    area("440000", "大分県", "Oita", "おおいたけん", "010900"),
    area("450000", "宮崎県", "Miyazaki", "みやざきけん", "011000"),
    area("460040", "奄美地方", "Amami", "あまみちほう", "011000"),
    area(
        "460100",
        "鹿児島県（奄美地方除く）",
        "Kagoshima (Excluding Amami)",
        "かごしまけん（あまみちほうのぞく）",
        "011000",
    ),
    area("471000", "沖縄本島地方", "Okinawa Main Island", "おきなわほんとうちほう", "011100"),
    area("472000", "大東島地方", "Daitojima", "だいとうじまちほう", "011100"),
    area("473000", "宮古島地方", "Miyakojima", "みやこじまちほう", "011100"),
    area("474000", "八重山地方", "Yaeyama", "やえやまちほう", "011100"),
];
