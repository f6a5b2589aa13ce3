//! Immutable content catalog: per-city locations, goods, buildings, event
//! pools, fares and rent tables.
//!
//! The catalog is loaded once at startup and passed by reference to every
//! component that needs city data; nothing in the simulation writes to it.
//! A built-in four-city data set ships with the crate; a custom catalog can
//! be loaded from YAML.

use crate::events::{CommercialEvent, HealthEvent, MoneyEvent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Goods ids are globally unique: `city_id * GOODS_ID_BASE + local_index`.
/// A good keeps its identity when the player travels.
pub const GOODS_ID_BASE: i64 = 100_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub cities: Vec<CityConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityConfig {
    pub id: i64,
    /// ASCII key used in state, fares and the CLI ("beijing", "shanghai"...).
    pub key: String,
    pub name: String,
    pub short_name: String,
    pub locations: Vec<LocationDef>,
    pub goods: Vec<GoodsDef>,
    pub buildings: BuildingConfig,
    pub events: EventPools,
    pub fares: FareTable,
    pub rent: RentConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationDef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub has_market: bool,
    #[serde(default)]
    pub is_train_station: bool,
    #[serde(default)]
    pub is_airport: bool,
    /// Key of a city reachable through an intercity rail tunnel from here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intercity_tunnel: Option<String>,
}

impl LocationDef {
    pub fn is_transportation_hub(&self) -> bool {
        self.is_train_station || self.is_airport
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodsDef {
    pub name: String,
    pub base_price: i64,
    pub price_range: i64,
    /// Fame lost per unit sold; nonzero marks socially harmful contraband.
    #[serde(default)]
    pub fame_penalty: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingConfig {
    pub hospital: HospitalConfig,
    pub work_types: Vec<WorkType>,
    pub house_types: Vec<HouseType>,
    pub restaurant: RestaurantConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalConfig {
    pub cost_per_point: i64,
    /// Below this health the player is involuntarily hospitalized.
    pub trigger_health: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkType {
    pub id: String,
    pub name: String,
    pub income_min: i64,
    pub income_max: i64,
    pub stamina_cost_min: i32,
    pub stamina_cost_max: i32,
    /// Up-front charge collected before working (e.g. delivery deposit).
    #[serde(default)]
    pub deposit: i64,
    /// Times per week this work can be done; 0 means unlimited.
    #[serde(default)]
    pub daily_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseType {
    pub id: String,
    pub name: String,
    pub monthly_rent: i64,
    pub capacity_increase: i64,
    /// Cash at or above this halves the move-in deposit; 0 disables.
    #[serde(default)]
    pub discount_threshold: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantConfig {
    pub cost_min: i64,
    pub cost_max: i64,
    pub stamina_min: i32,
    pub stamina_max: i32,
    pub poisoning_pct: i64,
    pub poisoning_damage_min: i32,
    pub poisoning_damage_max: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPools {
    pub commercial: Vec<CommercialEvent>,
    pub health: Vec<HealthEvent>,
    pub money: Vec<MoneyEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareTable {
    /// Destination city key -> one-way fare.
    pub train: BTreeMap<String, i64>,
    pub plane: BTreeMap<String, i64>,
    pub subway: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentConfig {
    pub base_rent: i64,
    pub hotel_daily_price: i64,
}

impl CityConfig {
    pub fn goods_id(&self, index: usize) -> i64 {
        self.id * GOODS_ID_BASE + index as i64
    }

    pub fn owns_goods(&self, goods_id: i64) -> bool {
        goods_id / GOODS_ID_BASE == self.id
    }

    pub fn location(&self, id: i64) -> Option<&LocationDef> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn first_location(&self) -> Option<&LocationDef> {
        self.locations.first()
    }

    pub fn train_station(&self) -> Option<&LocationDef> {
        self.locations.iter().find(|l| l.is_train_station)
    }

    pub fn airport(&self) -> Option<&LocationDef> {
        self.locations.iter().find(|l| l.is_airport)
    }

    /// Location from which an intercity tunnel leads to `target`.
    pub fn tunnel_to(&self, target_key: &str) -> Option<&LocationDef> {
        self.locations
            .iter()
            .find(|l| l.intercity_tunnel.as_deref() == Some(target_key))
    }

    pub fn work_type(&self, id: &str) -> Option<&WorkType> {
        self.buildings.work_types.iter().find(|w| w.id == id)
    }

    pub fn house_type(&self, id: &str) -> Option<&HouseType> {
        self.buildings.house_types.iter().find(|h| h.id == id)
    }
}

pub fn parse_goods_id(goods_id: i64) -> (i64, usize) {
    (goods_id / GOODS_ID_BASE, (goods_id % GOODS_ID_BASE) as usize)
}

impl Catalog {
    pub fn city(&self, key: &str) -> Option<&CityConfig> {
        self.cities.iter().find(|c| c.key == key)
    }

    pub fn city_by_id(&self, id: i64) -> Option<&CityConfig> {
        self.cities.iter().find(|c| c.id == id)
    }

    /// Resolve a global goods id to its owning city and definition.
    pub fn goods_def(&self, goods_id: i64) -> Option<(&CityConfig, &GoodsDef)> {
        let (city_id, index) = parse_goods_id(goods_id);
        let city = self.city_by_id(city_id)?;
        let def = city.goods.get(index)?;
        Some((city, def))
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        let catalog: Self = serde_yaml::from_str(&text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject malformed content up front so the simulation never has to.
    pub fn validate(&self) -> Result<(), String> {
        if self.cities.is_empty() {
            return Err("catalog has no cities".to_string());
        }
        for city in &self.cities {
            if self.cities.iter().filter(|c| c.key == city.key).count() > 1 {
                return Err(format!("duplicate city key {}", city.key));
            }
            if self.cities.iter().filter(|c| c.id == city.id).count() > 1 {
                return Err(format!("duplicate city id {}", city.id));
            }
            if city.locations.is_empty() {
                return Err(format!("{}: no locations", city.key));
            }
            if city.goods.len() >= GOODS_ID_BASE as usize {
                return Err(format!("{}: too many goods", city.key));
            }
            let freqs = city
                .events
                .commercial
                .iter()
                .map(|e| e.freq)
                .chain(city.events.health.iter().map(|e| e.freq))
                .chain(city.events.money.iter().map(|e| e.freq));
            for freq in freqs {
                if freq <= 0 {
                    return Err(format!("{}: event with non-positive freq", city.key));
                }
            }
            for event in &city.events.commercial {
                if self.goods_def(event.goods_id).is_none() {
                    return Err(format!(
                        "{}: commercial event \"{}\" references unknown goods id {}",
                        city.key, event.message, event.goods_id
                    ));
                }
                if event.price_multiplier > 0 && event.price_divider > 0 {
                    return Err(format!(
                        "{}: commercial event \"{}\" sets both multiplier and divider",
                        city.key, event.message
                    ));
                }
            }
            for (key, fare) in city.fares.train.iter().chain(city.fares.plane.iter()) {
                if self.city(key).is_none() {
                    return Err(format!("{}: fare to unknown city {}", city.key, key));
                }
                if *fare <= 0 {
                    return Err(format!("{}: non-positive fare to {}", city.key, key));
                }
            }
            if let Some(loc) = city
                .locations
                .iter()
                .find(|l| l.intercity_tunnel.as_deref().is_some_and(|t| self.city(t).is_none()))
            {
                return Err(format!(
                    "{}: tunnel at {} targets unknown city",
                    city.key, loc.name
                ));
            }
        }
        Ok(())
    }

    pub fn builtin() -> Self {
        let catalog = Self {
            cities: vec![beijing(), shanghai(), guangzhou(), suzhou()],
        };
        debug_assert!(catalog.validate().is_ok());
        catalog
    }
}

// ---------------------------------------------------------------------------
// Built-in content. Keys are stable; goods ids follow list order.
// ---------------------------------------------------------------------------

fn g(name: &str, base_price: i64, price_range: i64) -> GoodsDef {
    GoodsDef {
        name: name.to_string(),
        base_price,
        price_range,
        fame_penalty: 0,
    }
}

fn contraband(name: &str, base_price: i64, price_range: i64, fame_penalty: i32) -> GoodsDef {
    GoodsDef {
        name: name.to_string(),
        base_price,
        price_range,
        fame_penalty,
    }
}

fn loc(id: i64, name: &str) -> LocationDef {
    LocationDef {
        id,
        name: name.to_string(),
        has_market: true,
        ..LocationDef::default()
    }
}

fn work(
    id: &str,
    name: &str,
    income: (i64, i64),
    stamina: (i32, i32),
    deposit: i64,
    daily_limit: u32,
) -> WorkType {
    WorkType {
        id: id.to_string(),
        name: name.to_string(),
        income_min: income.0,
        income_max: income.1,
        stamina_cost_min: stamina.0,
        stamina_cost_max: stamina.1,
        deposit,
        daily_limit,
    }
}

fn house(id: &str, name: &str, monthly_rent: i64, capacity_increase: i64, discount_threshold: i64) -> HouseType {
    HouseType {
        id: id.to_string(),
        name: name.to_string(),
        monthly_rent,
        capacity_increase,
        discount_threshold,
    }
}

fn commercial(freq: i64, message: &str, goods_id: i64) -> CommercialEvent {
    CommercialEvent {
        freq,
        message: message.to_string(),
        goods_id,
        ..CommercialEvent::default()
    }
}

fn health(freq: i64, message: &str, damage: i32) -> HealthEvent {
    HealthEvent {
        freq,
        message: message.to_string(),
        damage,
        sound: "breath.wav".to_string(),
        ..HealthEvent::default()
    }
}

fn expense(freq: i64, message: &str, cash_multiplier: i64) -> MoneyEvent {
    MoneyEvent {
        freq,
        message: message.to_string(),
        cash_multiplier,
        ..MoneyEvent::default()
    }
}

fn savings_drain(freq: i64, message: &str, cash_multiplier: i64) -> MoneyEvent {
    MoneyEvent {
        freq,
        message: message.to_string(),
        cash_multiplier,
        targets_savings: true,
        ..MoneyEvent::default()
    }
}

fn wager(
    freq: i64,
    message: &str,
    min_cash: i64,
    max_cash: i64,
    profit: f64,
    loss: f64,
) -> MoneyEvent {
    MoneyEvent {
        freq,
        message: message.to_string(),
        cash_based: true,
        min_cash,
        max_cash,
        profit_multiplier: Some(profit),
        loss_multiplier: Some(loss),
        ..MoneyEvent::default()
    }
}

fn beijing() -> CityConfig {
    let base = 0;
    CityConfig {
        id: 0,
        key: "beijing".to_string(),
        name: "北京".to_string(),
        short_name: "京".to_string(),
        locations: vec![
            LocationDef { is_train_station: true, ..loc(0, "北京站") },
            loc(1, "西直门"),
            loc(2, "崇文门"),
            loc(3, "东直门"),
            loc(4, "复兴门"),
            loc(5, "积水潭"),
            loc(6, "长椿街"),
            loc(7, "公主坟"),
            loc(8, "苹果园"),
            loc(9, "工体"),
            LocationDef { is_airport: true, has_market: false, ..loc(10, "首都机场") },
        ],
        goods: vec![
            g("进口香烟", 100, 350),
            g("走私汽车", 15000, 15000),
            g("潮玩手办", 200, 800),
            contraband("山西假白酒", 1000, 2500, 10),
            contraband("《上海小宝贝》", 5000, 9000, 7),
            g("进口玩具", 250, 600),
            g("水货手机", 750, 750),
            g("伪劣化妆品", 65, 180),
            g("Labubu盲盒", 280, 900),
            g("YOYO酱手办", 220, 700),
        ],
        buildings: BuildingConfig {
            hospital: HospitalConfig { cost_per_point: 350, trigger_health: 85 },
            work_types: vec![
                work("construction", "建筑工地", (300, 500), (8, 15), 0, 0),
                work("delivery", "送外卖", (10, 50), (5, 10), 15, 4),
                work("warehouse", "仓库搬运", (200, 400), (6, 12), 0, 0),
                work("security", "保安", (180, 320), (3, 6), 0, 0),
                work("tourguide", "导游", (250, 450), (5, 10), 0, 0),
            ],
            house_types: vec![
                house("studio", "一室一厅", 4500, 20, 0),
                house("one-bedroom", "两室一厅", 7000, 40, 50_000),
                house("three-bedroom", "三室两厅", 11000, 60, 80_000),
                house("luxury", "豪华公寓", 18000, 80, 120_000),
            ],
            restaurant: RestaurantConfig {
                cost_min: 30,
                cost_max: 80,
                stamina_min: 15,
                stamina_max: 30,
                poisoning_pct: 10,
                poisoning_damage_min: 5,
                poisoning_damage_max: 15,
            },
        },
        events: EventPools {
            commercial: vec![
                commercial(150, "空气污染严重，口罩需求暴增，进口香烟跟着涨价×2", base)
                    .with_multiplier(2),
                commercial(110, "沙尘暴来袭，走私汽车销量大增，价格×3", base + 1).with_multiplier(3),
                commercial(95, "798艺术区办展，潮玩手办价格×2", base + 2).with_multiplier(2),
                commercial(80, "烟酒专卖严打松动，山西假白酒价格×2", base + 3).with_multiplier(2),
                commercial(70, "胡同游火爆，《上海小宝贝》被游客抢购，价格×2", base + 4)
                    .with_multiplier(2),
                commercial(85, "海关查获大批进口玩具，市面货源紧张，价格×3", base + 5)
                    .with_multiplier(3),
                commercial(60, "中关村清仓甩卖，水货手机价格÷2", base + 6).with_divider(2),
                commercial(90, "工商突击检查，伪劣化妆品集中倾销，价格÷2", base + 7).with_divider(2),
                commercial(28, "清明前后雨纷纷，潮玩摊位收摊，手办价格÷2", base + 2).with_divider(2).with_tags(&["清明"]),
                commercial(26, "冬至夜市火爆，进口香烟价格×2", base).with_multiplier(2).with_tags(&["冬至"]),
                commercial(55, "城管清街，摊贩把一批伪劣化妆品塞给你让你帮忙带走", base + 7)
                    .with_given(5, 0),
                commercial(45, "几个壮汉堵住你，强卖给你一批山西假白酒", base + 3)
                    .with_multiplier(2)
                    .with_given(3, 2000),
            ],
            health: vec![
                health(180, "PM2.5爆表，呼吸困难", 3),
                health(140, "沙尘暴席卷京城，眼睛刺痛", 2),
                health(120, "雾霾天持续，咳嗽不止", 2),
                health(100, "空气污染严重，头晕乏力", 1),
                health(90, "春季过敏，花粉症发作", 2).with_tags(&["spring"]),
                health(85, "冬季供暖，室内空气干燥", 1).with_tags(&["winter"]),
            ],
            money: vec![
                expense(80, "雾霾天开车，能见度低，违章罚款", 10),
                expense(100, "胡同追逐游戏，手机摔坏", 8),
                expense(70, "故宫门票涨价，临时消费增加", 15),
                expense(90, "空气净化器坏了，紧急更换", 25),
                savings_drain(85, "银行系统故障，你的账户被误扣手续费", 20),
                savings_drain(75, "买的理财产品暴雷", 15),
                wager(120, "地下彩票开奖", 1000, 50_000, 2.0, 0.5),
                wager(95, "朋友拉你炒股", 2000, 100_000, 0.8, 0.6),
            ],
        },
        fares: FareTable {
            train: fares(&[("shanghai", 450), ("guangzhou", 550), ("suzhou", 350)]),
            plane: fares(&[("shanghai", 1200), ("guangzhou", 1500), ("suzhou", 1300)]),
            subway: 3,
        },
        rent: RentConfig { base_rent: 5000, hotel_daily_price: 450 },
    }
}

fn shanghai() -> CityConfig {
    let base = GOODS_ID_BASE;
    CityConfig {
        id: 1,
        key: "shanghai".to_string(),
        name: "上海".to_string(),
        short_name: "沪".to_string(),
        locations: vec![
            loc(0, "外滩"),
            loc(1, "陆家嘴"),
            loc(2, "南京路"),
            loc(3, "徐家汇"),
            loc(4, "人民广场"),
            loc(5, "新天地"),
            loc(6, "静安寺"),
            loc(7, "五角场"),
            LocationDef {
                is_train_station: true,
                is_airport: true,
                ..loc(9, "虹桥枢纽")
            },
            LocationDef { is_airport: true, has_market: false, ..loc(10, "浦东机场") },
            LocationDef {
                intercity_tunnel: Some("suzhou".to_string()),
                ..loc(11, "花桥站")
            },
        ],
        goods: vec![
            g("进口香烟", 100, 350),
            g("走私汽车", 15000, 15000),
            g("潮玩手办", 200, 800),
            contraband("山西假白酒", 1000, 2500, 10),
            contraband("《上海小宝贝》", 5000, 9000, 7),
            g("进口玩具", 250, 600),
            g("水货手机", 750, 750),
            g("伪劣化妆品", 65, 180),
            g("Labubu限量盲盒", 320, 1200),
            g("YOYO酱潮玩", 260, 900),
        ],
        buildings: BuildingConfig {
            hospital: HospitalConfig { cost_per_point: 400, trigger_health: 85 },
            work_types: vec![
                work("construction", "建筑工地", (280, 500), (8, 15), 0, 0),
                work("delivery", "送外卖", (10, 50), (5, 10), 15, 4),
                work("warehouse", "仓库搬运", (200, 400), (6, 12), 0, 0),
                work("intern", "实习生", (120, 260), (3, 6), 0, 0),
                work("driver", "网约车司机", (220, 420), (6, 12), 50, 0),
            ],
            house_types: vec![
                house("studio", "一室一厅", 4800, 20, 0),
                house("one-bedroom", "两室一厅", 7500, 40, 50_000),
                house("three-bedroom", "三室两厅", 12000, 60, 80_000),
                house("luxury", "豪华公寓", 20000, 80, 150_000),
            ],
            restaurant: RestaurantConfig {
                cost_min: 40,
                cost_max: 100,
                stamina_min: 15,
                stamina_max: 30,
                poisoning_pct: 8,
                poisoning_damage_min: 5,
                poisoning_damage_max: 15,
            },
        },
        events: EventPools {
            commercial: vec![
                commercial(150, "外滩夜景灯光秀，《上海小宝贝》被炒上天，价格×3", base + 4)
                    .with_multiplier(3),
                commercial(110, "陆家嘴CBD高峰，走私汽车价格×2", base + 1).with_multiplier(2),
                commercial(95, "新天地酒吧街火爆，潮玩手办价格×2", base + 2).with_multiplier(2),
                commercial(80, "南京路步行街促销，伪劣化妆品价格×2", base + 7).with_multiplier(2),
                commercial(70, "豫园商城庙会，山西假白酒价格×3", base + 3).with_multiplier(3),
                commercial(85, "徐家汇商圈打折季，水货手机价格÷2", base + 6).with_divider(2),
                commercial(60, "田子坊创意园区开集，Labubu限量盲盒价格×3", base + 8)
                    .with_multiplier(3),
                commercial(75, "五角场大学城开学，进口香烟价格×2", base).with_multiplier(2),
                commercial(30, "夏至夜排档爆满，YOYO酱潮玩地摊价×2", base + 9).with_multiplier(2).with_tags(&["夏至"]),
                commercial(58, "快递站无人认领一箱进口玩具，站长塞给了你", base + 5).with_given(4, 0),
                commercial(46, "地铁口有人死缠烂打，强卖给你几部水货手机", base + 6)
                    .with_multiplier(2)
                    .with_given(3, 1500),
            ],
            health: vec![
                health(180, "加班到凌晨，身体疲惫不堪", 3),
                health(140, "996工作制，长期熬夜", 2),
                health(120, "雾霾天持续，呼吸不适", 2),
                health(100, "快节奏生活，精神紧张", 1),
                health(90, "黄梅天潮湿，关节疼痛", 2).with_tags(&["谷雨"]),
                health(85, "空调病频发，头晕乏力", 1).with_tags(&["summer"]),
            ],
            money: vec![
                expense(80, "加班打车，临时消费增加", 15),
                expense(100, "外滩消费太高，钱包大出血", 25),
                expense(70, "新天地酒吧消费，临时开销", 20),
                expense(90, "徐家汇购物，信用卡刷爆", 30),
                savings_drain(85, "银行卡被盗刷，存款受损", 18),
                savings_drain(70, "跟风买的基金清盘", 12),
                wager(120, "陆家嘴朋友带你打新股", 2000, 100_000, 1.2, 0.5),
                wager(90, "众筹奶茶店开业", 1000, 30_000, 1.5, 0.8),
            ],
        },
        fares: FareTable {
            train: fares(&[("beijing", 450), ("guangzhou", 550), ("suzhou", 35)]),
            plane: fares(&[("beijing", 1200), ("guangzhou", 1500)]),
            subway: 4,
        },
        rent: RentConfig { base_rent: 5500, hotel_daily_price: 450 },
    }
}

fn guangzhou() -> CityConfig {
    let base = 2 * GOODS_ID_BASE;
    CityConfig {
        id: 2,
        key: "guangzhou".to_string(),
        name: "广州".to_string(),
        short_name: "粤".to_string(),
        locations: vec![
            loc(0, "天河城"),
            loc(1, "珠江新城"),
            loc(2, "北京路"),
            loc(3, "上下九"),
            loc(4, "体育西路"),
            loc(5, "大学城"),
            loc(6, "琶洲"),
            loc(7, "白云山"),
            loc(8, "越秀公园"),
            loc(9, "沙面"),
            LocationDef { is_airport: true, has_market: false, ..loc(10, "白云机场") },
            LocationDef { is_train_station: true, ..loc(11, "广州站") },
        ],
        goods: vec![
            g("广式点心", 80, 200),
            g("进口电子产品", 2000, 5000),
            g("服装批发", 50, 300),
            g("茶叶", 200, 800),
            contraband("《岭南文化》", 4000, 8000, 7),
            g("进口水果", 150, 500),
            g("手机配件", 100, 400),
            g("中药材", 300, 1000),
            g("Labubu摆件", 260, 900),
            g("YOYO酱钥匙扣", 80, 250),
        ],
        buildings: BuildingConfig {
            hospital: HospitalConfig { cost_per_point: 300, trigger_health: 90 },
            work_types: vec![
                work("construction", "建筑工地", (280, 480), (8, 15), 0, 0),
                work("delivery", "送外卖", (10, 50), (5, 10), 15, 4),
                work("stallkeeper", "夜市摆摊", (150, 350), (5, 10), 30, 0),
                work("fairbooth", "广交会翻译", (260, 460), (4, 9), 0, 0),
            ],
            house_types: vec![
                house("studio", "一室一厅", 3200, 20, 0),
                house("one-bedroom", "两室一厅", 5200, 40, 40_000),
                house("three-bedroom", "三室两厅", 8500, 60, 70_000),
                house("luxury", "豪华公寓", 14000, 80, 100_000),
            ],
            restaurant: RestaurantConfig {
                cost_min: 25,
                cost_max: 70,
                stamina_min: 18,
                stamina_max: 35,
                poisoning_pct: 12,
                poisoning_damage_min: 5,
                poisoning_damage_max: 18,
            },
        },
        events: EventPools {
            commercial: vec![
                commercial(150, "早茶旺季，广式点心价格×2", base).with_multiplier(2),
                commercial(110, "广交会开幕，进口电子产品价格×3", base + 1).with_multiplier(3),
                commercial(95, "十三行大批尾货涌入，服装批发价格÷2", base + 2).with_divider(2),
                commercial(80, "春茶上市被爆炒，茶叶价格×3", base + 3).with_multiplier(3),
                commercial(70, "文化节热度高涨，《岭南文化》价格×2", base + 4).with_multiplier(2),
                commercial(85, "东南亚水果滞销甩卖，进口水果价格÷2", base + 5).with_divider(2),
                commercial(60, "华强北档口查封，手机配件价格×2", base + 6).with_multiplier(2),
                commercial(90, "回南天药材受潮，中药材价格÷2", base + 7).with_divider(2),
                commercial(30, "立夏凉茶铺排长龙，中药材价格×2", base + 7).with_multiplier(2).with_tags(&["立夏"]),
                commercial(56, "档口老板清仓跑路，留给你一堆YOYO酱钥匙扣", base + 9).with_given(6, 0),
                commercial(44, "城中村口被堵，强买强卖一批茶叶", base + 3)
                    .with_multiplier(2)
                    .with_given(3, 1200),
            ],
            health: vec![
                health(170, "回南天湿气重，浑身无力", 2),
                health(130, "桑拿天中暑，头晕目眩", 3),
                health(110, "夜宵吃多了，肠胃不适", 2),
                health(95, "蚊虫肆虐，整夜难眠", 1),
                health(85, "大暑酷热难耐", 2).with_tags(&["大暑"]),
                health(80, "秋燥上火，喉咙沙哑", 1).with_tags(&["autumn"]),
            ],
            money: vec![
                expense(80, "暴雨淹了电动车，修车花钱", 12),
                expense(100, "夜市消费失控，钱包见底", 20),
                expense(70, "台风天改签机票，额外费用", 15),
                expense(90, "帮衬老乡生意被宰", 18),
                savings_drain(80, "P2P平台跑路，存款被套", 22),
                savings_drain(72, "银行理财亏损兑付", 10),
                wager(115, "珠江边买地下六合彩", 1000, 40_000, 2.5, 0.6),
                wager(92, "入股大排档", 2000, 60_000, 1.0, 0.7),
            ],
        },
        fares: FareTable {
            train: fares(&[("beijing", 550), ("shanghai", 550), ("suzhou", 500)]),
            plane: fares(&[("beijing", 1500), ("shanghai", 1500), ("suzhou", 1400)]),
            subway: 3,
        },
        rent: RentConfig { base_rent: 3500, hotel_daily_price: 350 },
    }
}

fn suzhou() -> CityConfig {
    let base = 3 * GOODS_ID_BASE;
    CityConfig {
        id: 3,
        key: "suzhou".to_string(),
        name: "苏州".to_string(),
        short_name: "苏".to_string(),
        locations: vec![
            loc(0, "观前街"),
            loc(1, "金鸡湖"),
            loc(2, "拙政园"),
            loc(3, "山塘街"),
            LocationDef { is_train_station: true, ..loc(4, "苏州火车站") },
            loc(5, "园区湖东"),
            loc(6, "石路"),
            loc(7, "同里古镇"),
            LocationDef {
                intercity_tunnel: Some("shanghai".to_string()),
                ..loc(8, "花桥站")
            },
        ],
        goods: vec![
            g("苏式糖果", 60, 200),
            g("真丝旗袍", 800, 1500),
            g("园林门票代售", 120, 300),
            g("手工刺绣", 300, 1200),
            g("茶点礼盒", 180, 600),
            g("小众首饰", 200, 500),
            g("摄影代拍服务", 400, 800),
            g("仿古摆件", 150, 400),
        ],
        buildings: BuildingConfig {
            hospital: HospitalConfig { cost_per_point: 300, trigger_health: 85 },
            work_types: vec![
                work("construction", "建筑工地", (250, 450), (8, 15), 0, 0),
                work("delivery", "送外卖", (10, 45), (5, 10), 15, 4),
                work("craftsman", "手工艺人", (180, 380), (4, 8), 0, 0),
                work("tourguide", "导游", (220, 420), (5, 10), 0, 0),
            ],
            house_types: vec![
                house("studio", "一室一厅", 3000, 20, 0),
                house("one-bedroom", "两室一厅", 5000, 40, 40_000),
                house("three-bedroom", "三室两厅", 8000, 60, 70_000),
                house("luxury", "豪华公寓", 12000, 80, 100_000),
            ],
            restaurant: RestaurantConfig {
                cost_min: 25,
                cost_max: 65,
                stamina_min: 15,
                stamina_max: 28,
                poisoning_pct: 8,
                poisoning_damage_min: 4,
                poisoning_damage_max: 12,
            },
        },
        events: EventPools {
            commercial: vec![
                commercial(140, "旅游旺季，苏式糖果价格×2", base).with_multiplier(2),
                commercial(105, "汉服热带火真丝旗袍，价格×3", base + 1).with_multiplier(3),
                commercial(90, "景区限流，园林门票代售价格×2", base + 2).with_multiplier(2),
                commercial(75, "绣娘直播出圈，手工刺绣价格×3", base + 3).with_multiplier(3),
                commercial(85, "茶点礼盒滞销，价格÷2", base + 4).with_divider(2),
                commercial(65, "文创市集开张，小众首饰价格×2", base + 5).with_multiplier(2),
                commercial(95, "古镇摄影内卷，代拍服务价格÷2", base + 6).with_divider(2),
                commercial(28, "春分踏青人潮，园林门票代售价格×2", base + 2).with_multiplier(2).with_tags(&["春分"]),
                commercial(54, "仿古摆件作坊倒闭，老板抵债塞给你一批货", base + 7).with_given(5, 0),
                commercial(42, "山塘街口被拉住，强卖给你几盒茶点礼盒", base + 4)
                    .with_multiplier(2)
                    .with_given(4, 800),
            ],
            health: vec![
                health(170, "水乡湿冷，受凉感冒", 2),
                health(130, "步行逛园林，脚底起泡", 1),
                health(110, "夜游古镇淋雨，发烧", 3),
                health(90, "梅雨闷湿，旧伤复发", 2).with_tags(&["transition"]),
                health(80, "小寒夜寒，冻得直哆嗦", 2).with_tags(&["小寒"]),
            ],
            money: vec![
                expense(85, "景区门票连环消费", 12),
                expense(100, "文创店剁手停不下来", 15),
                expense(75, "船票被黄牛加价", 10),
                expense(95, "住宿旺季涨价", 18),
                savings_drain(82, "存单质押纠纷，存款被冻结扣款", 15),
                savings_drain(74, "小银行挤兑风波", 12),
                wager(110, "茶馆里有人攒局投资民宿", 1500, 50_000, 1.4, 0.7),
                wager(88, "古玩市场赌石", 1000, 30_000, 2.2, 0.9),
            ],
        },
        fares: FareTable {
            train: fares(&[("beijing", 350), ("shanghai", 35), ("guangzhou", 500)]),
            plane: BTreeMap::new(),
            subway: 2,
        },
        rent: RentConfig { base_rent: 2800, hotel_daily_price: 300 },
    }
}

fn fares(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

impl CommercialEvent {
    fn with_multiplier(mut self, multiplier: i64) -> Self {
        self.price_multiplier = multiplier;
        self
    }

    fn with_divider(mut self, divider: i64) -> Self {
        self.price_divider = divider;
        self
    }

    fn with_given(mut self, goods_given: i64, cost: i64) -> Self {
        self.goods_given = goods_given;
        self.cost = cost;
        self
    }

    fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}

impl HealthEvent {
    fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}
