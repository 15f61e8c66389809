//! Built-in catalogue: every city gets one place per template.

use crate::domain::catalogue::{
    entity::{City, Place},
    store::{Catalogue, CatalogueError},
};

const CITIES: &[(&str, &str)] = &[
    ("msk", "Москва"),
    ("spb", "Санкт-Петербург"),
    ("nsk", "Новосибирск"),
    ("ekb", "Екатеринбург"),
    ("kzn", "Казань"),
    ("nnv", "Нижний Новгород"),
    ("chel", "Челябинск"),
    ("smr", "Самара"),
    ("oms", "Омск"),
    ("ros", "Ростов-на-Дону"),
    ("ufa", "Уфа"),
    ("krsk", "Красноярск"),
    ("vor", "Воронеж"),
    ("perm", "Пермь"),
    ("vol", "Волгоград"),
    ("krd", "Краснодар"),
    ("inn", "Иннополис"),
    ("tyum", "Тюмень"),
    ("irk", "Иркутск"),
    ("tol", "Тольятти"),
    ("uly", "Ульяновск"),
];

struct PlaceTemplate {
    name: &'static str,
    excerpt: &'static str,
    tags: [&'static str; 2],
}

const PLACE_TEMPLATES: &[PlaceTemplate] = &[
    PlaceTemplate { name: "Центральный парк", excerpt: "Романтические прогулки среди зелени", tags: ["природа", "прогулки"] },
    PlaceTemplate { name: "Набережная", excerpt: "Красивые виды на воду", tags: ["вода", "закат"] },
    PlaceTemplate { name: "Старый город", excerpt: "Историческая атмосфера", tags: ["история", "архитектура"] },
    PlaceTemplate { name: "Смотровая площадка", excerpt: "Панорамный вид на город", tags: ["виды", "фото"] },
    PlaceTemplate { name: "Ботанический сад", excerpt: "Уединенные аллеи и цветы", tags: ["природа", "цветы"] },
    PlaceTemplate { name: "Кафе на крыше", excerpt: "Романтические ужины под звездами", tags: ["еда", "атмосфера"] },
    PlaceTemplate { name: "Театральная площадь", excerpt: "Культурный центр города", tags: ["культура", "театр"] },
    PlaceTemplate { name: "Речной порт", excerpt: "Прогулки на теплоходе", tags: ["вода", "прогулка"] },
    PlaceTemplate { name: "Парк развлечений", excerpt: "Веселые приключения вдвоем", tags: ["развлечения", "адреналин"] },
    PlaceTemplate { name: "Винный бар", excerpt: "Уютная атмосфера для двоих", tags: ["алкоголь", "уют"] },
    PlaceTemplate { name: "Арт-галерея", excerpt: "Современное искусство", tags: ["искусство", "культура"] },
    PlaceTemplate { name: "Спа-центр", excerpt: "Релаксация и романтика", tags: ["релакс", "спа"] },
    PlaceTemplate { name: "Ресторан", excerpt: "Изысканная кухня", tags: ["еда", "ресторан"] },
    PlaceTemplate { name: "Музей", excerpt: "Познавательные экскурсии", tags: ["образование", "история"] },
    PlaceTemplate { name: "Пляж", excerpt: "Песок и романтические закаты", tags: ["пляж", "закат"] },
    PlaceTemplate { name: "Мост", excerpt: "Символ любви и верности", tags: ["символ", "виды"] },
    PlaceTemplate { name: "Храм", excerpt: "Духовное единение", tags: ["религия", "архитектура"] },
    PlaceTemplate { name: "Рынок", excerpt: "Местный колорит и вкусы", tags: ["еда", "традиции"] },
    PlaceTemplate { name: "Парк аттракционов", excerpt: "Детские воспоминания вместе", tags: ["развлечения", "ностальгия"] },
    PlaceTemplate { name: "Планетарий", excerpt: "Звезды для влюбленных", tags: ["наука", "романтика"] },
];

const IMAGE_ATTRIBUTION: &str = "Wikimedia Commons";

pub fn builtin() -> Result<Catalogue, CatalogueError> {
    let cities: Vec<City> = CITIES
        .iter()
        .map(|(id, name)| City {
            id: (*id).to_string(),
            name: (*name).to_string(),
        })
        .collect();

    let places = cities
        .iter()
        .flat_map(|city| {
            PLACE_TEMPLATES
                .iter()
                .enumerate()
                .map(move |(i, template)| place_from_template(&city.id, i + 1, template))
        })
        .collect();

    Catalogue::new(cities, places)
}

fn place_from_template(city_id: &str, number: usize, template: &PlaceTemplate) -> Place {
    Place {
        id: format!("{}-{}-{}", city_id, slug(template.name), number),
        city_id: city_id.to_string(),
        name: template.name.to_string(),
        excerpt: template.excerpt.to_string(),
        image_url: format!("/static/images/{0}/{0}-place-{1}.jpg", city_id, number),
        image_attribution: IMAGE_ATTRIBUTION.to_string(),
        tags: template.tags.iter().map(|t| (*t).to_string()).collect(),
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
