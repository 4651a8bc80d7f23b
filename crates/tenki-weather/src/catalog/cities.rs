//! Forecast cities of the tsukumijima weather API.
//!
//! Codes follow https://weather.tsukumijima.net/primary_area.xml.

use super::{Catalog, CatalogEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct City {
    pub code: &'static str,
    pub prefecture: &'static str,
    pub name: &'static str,
}

impl CatalogEntry for City {
    fn id(&self) -> &'static str {
        self.code
    }

    fn display_name(&self) -> &'static str {
        self.name
    }

    fn parent_region(&self) -> &'static str {
        self.prefecture
    }

    fn option_label(&self) -> String {
        format!("{} - {}", self.prefecture, self.name)
    }
}

const fn city(code: &'static str, prefecture: &'static str, name: &'static str) -> City {
    City {
        code,
        prefecture,
        name,
    }
}

/// Default selection.
pub const TOKYO: City = city("130010", "東京都", "東京");

pub static CITIES: Catalog<City> = Catalog::new("city", ENTRIES);

const ENTRIES: &[City] = &[
    city("011000", "北海道", "稚内"),
    city("012010", "北海道", "旭川"),
    city("012020", "北海道", "留萌"),
    city("013010", "北海道", "網走"),
    city("013020", "北海道", "北見"),
    city("013030", "北海道", "紋別"),
    city("014010", "北海道", "根室"),
    city("014020", "北海道", "釧路"),
    city("014030", "北海道", "帯広"),
    city("015010", "北海道", "室蘭"),
    city("015020", "北海道", "浦河"),
    city("016010", "北海道", "札幌"),
    city("016020", "北海道", "岩見沢"),
    city("016030", "北海道", "倶知安"),
    city("017010", "北海道", "函館"),
    city("017020", "北海道", "江差"),
    city("020010", "青森県", "青森"),
    city("020020", "青森県", "むつ"),
    city("020030", "青森県", "八戸"),
    city("030010", "岩手県", "盛岡"),
    city("030020", "岩手県", "宮古"),
    city("030030", "岩手県", "大船渡"),
    city("040010", "宮城県", "仙台"),
    city("040020", "宮城県", "白石"),
    city("050010", "秋田県", "秋田"),
    city("050020", "秋田県", "横手"),
    city("060010", "山形県", "山形"),
    city("060020", "山形県", "米沢"),
    city("060030", "山形県", "酒田"),
    city("060040", "山形県", "新庄"),
    city("070010", "福島県", "福島"),
    city("070020", "福島県", "小名浜"),
    city("070030", "福島県", "若松"),
    city("080010", "茨城県", "水戸"),
    city("080020", "茨城県", "土浦"),
    city("090010", "栃木県", "宇都宮"),
    city("090020", "栃木県", "大田原"),
    city("100010", "群馬県", "前橋"),
    city("100020", "群馬県", "みなかみ"),
    city("110010", "埼玉県", "さいたま"),
    city("110020", "埼玉県", "熊谷"),
    city("110030", "埼玉県", "秩父"),
    city("120010", "千葉県", "千葉"),
    city("120020", "千葉県", "銚子"),
    city("120030", "千葉県", "館山"),
    TOKYO,
    city("130020", "東京都", "大島"),
    city("130030", "東京都", "八丈島"),
    city("130040", "東京都", "父島"),
    city("140010", "神奈川県", "横浜"),
    city("140020", "神奈川県", "小田原"),
    city("150010", "新潟県", "新潟"),
    city("150020", "新潟県", "長岡"),
    city("150030", "新潟県", "高田"),
    city("150040", "新潟県", "相川"),
    city("160010", "富山県", "富山"),
    city("160020", "富山県", "伏木"),
    city("170010", "石川県", "金沢"),
    city("170020", "石川県", "輪島"),
    city("180010", "福井県", "福井"),
    city("180020", "福井県", "敦賀"),
    city("190010", "山梨県", "甲府"),
    city("190020", "山梨県", "河口湖"),
    city("200010", "長野県", "長野"),
    city("200020", "長野県", "松本"),
    city("200030", "長野県", "飯田"),
    city("210010", "岐阜県", "岐阜"),
    city("210020", "岐阜県", "高山"),
    city("220010", "静岡県", "静岡"),
    city("220020", "静岡県", "網代"),
    city("220030", "静岡県", "三島"),
    city("220040", "静岡県", "浜松"),
    city("230010", "愛知県", "名古屋"),
    city("230020", "愛知県", "豊橋"),
    city("240010", "三重県", "津"),
    city("240020", "三重県", "尾鷲"),
    city("250010", "滋賀県", "大津"),
    city("250020", "滋賀県", "彦根"),
    city("260010", "京都府", "京都"),
    city("260020", "京都府", "舞鶴"),
    city("270000", "大阪府", "大阪"),
    city("280010", "兵庫県", "神戸"),
    city("280020", "兵庫県", "豊岡"),
    city("290010", "奈良県", "奈良"),
    city("290020", "奈良県", "風屋"),
    city("300010", "和歌山県", "和歌山"),
    city("300020", "和歌山県", "潮岬"),
    city("310010", "鳥取県", "鳥取"),
    city("310020", "鳥取県", "米子"),
    city("320010", "島根県", "松江"),
    city("320020", "島根県", "浜田"),
    city("320030", "島根県", "西郷"),
    city("330010", "岡山県", "岡山"),
    city("330020", "岡山県", "津山"),
    city("340010", "広島県", "広島"),
    city("340020", "広島県", "庄原"),
    city("350010", "山口県", "下関"),
    city("350020", "山口県", "山口"),
    city("350030", "山口県", "柳井"),
    city("350040", "山口県", "萩"),
    city("360010", "徳島県", "徳島"),
    city("360020", "徳島県", "日和佐"),
    city("370000", "香川県", "高松"),
    city("380010", "愛媛県", "松山"),
    city("380020", "愛媛県", "新居浜"),
    city("380030", "愛媛県", "宇和島"),
    city("390010", "高知県", "高知"),
    city("390020", "高知県", "室戸岬"),
    city("390030", "高知県", "清水"),
    city("400010", "福岡県", "福岡"),
    city("400020", "福岡県", "八幡"),
    city("400030", "福岡県", "飯塚"),
    city("400040", "福岡県", "久留米"),
    city("410010", "佐賀県", "佐賀"),
    city("410020", "佐賀県", "伊万里"),
    city("420010", "長崎県", "長崎"),
    city("420020", "長崎県", "佐世保"),
    city("420030", "長崎県", "厳原"),
    city("420040", "長崎県", "福江"),
    city("430010", "熊本県", "熊本"),
    city("430020", "熊本県", "阿蘇乙姫"),
    city("430030", "熊本県", "牛深"),
    city("430040", "熊本県", "人吉"),
    city("440010", "大分県", "大分"),
    city("440020", "大分県", "中津"),
    city("440030", "大分県", "日田"),
    city("440040", "大分県", "佐伯"),
    city("450010", "宮崎県", "宮崎"),
    city("450020", "宮崎県", "延岡"),
    city("450030", "宮崎県", "都城"),
    city("450040", "宮崎県", "高千穂"),
    city("460010", "鹿児島県", "鹿児島"),
    city("460020", "鹿児島県", "鹿屋"),
    city("460030", "鹿児島県", "種子島"),
    city("460040", "鹿児島県", "名瀬"),
    city("471010", "沖縄県", "那覇"),
    city("471020", "沖縄県", "名護"),
    city("471030", "沖縄県", "久米島"),
    city("472000", "沖縄県", "南大東"),
    city("473000", "沖縄県", "宮古島"),
    city("474010", "沖縄県", "石垣島"),
    city("474020", "沖縄県", "与那国島"),
];
