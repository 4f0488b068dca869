//! Service offerings listed on the services page.

use serde::Serialize;

/// Currency of every published price.
pub const CURRENCY: &str = "AED";

/// How a starting price is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceBasis {
    /// Starting price for a whole engagement.
    From,
    PerHour,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub basis: PriceBasis,
    pub currency: &'static str,
    pub features: Vec<&'static str>,
}

impl ServiceOffering {
    fn new(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        price: f64,
        basis: PriceBasis,
        features: Vec<&'static str>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            price,
            basis,
            currency: CURRENCY,
            features,
        }
    }
}

/// The studio's fixed list of services.
pub fn standard_services() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering::new(
            "interior_design",
            "التصميم الداخلي",
            "تصاميم مخصصة تعكس ذوقك وشخصيتك",
            5_000.0,
            PriceBasis::From,
            vec!["استشارة مجانية", "تصاميم ثلاثية الأبعاد", "اختيار المواد"],
        ),
        ServiceOffering::new(
            "villa_design",
            "تصميم الفلل",
            "تصاميم فاخرة للفلل السكنية",
            15_000.0,
            PriceBasis::From,
            vec!["تصميم شامل", "إشراف على التنفيذ", "ضمان الجودة"],
        ),
        ServiceOffering::new(
            "furnishing",
            "تأثيث المساحات",
            "اختيار الأثاث والديكور المناسب",
            3_000.0,
            PriceBasis::From,
            vec!["اختيار الأثاث", "التنسيق الداخلي", "التوصيل والتركيب"],
        ),
        ServiceOffering::new(
            "lighting_decor",
            "الإضاءة والديكور",
            "تصاميم إضاءة حديثة وديكور مميز",
            2_000.0,
            PriceBasis::From,
            vec!["تصميم الإضاءة", "ديكور معاصر", "تركيب احترافي"],
        ),
        ServiceOffering::new(
            "finishing",
            "التشطيبات",
            "تشطيبات عالية الجودة بأفضل الأسعار",
            1_000.0,
            PriceBasis::From,
            vec!["دهان احترافي", "أرضيات فخمة", "جدران مزخرفة"],
        ),
        ServiceOffering::new(
            "advanced_consultation",
            "الاستشارات المتقدمة",
            "استشارات متخصصة من خبرائنا",
            500.0,
            PriceBasis::PerHour,
            vec!["استشارة شاملة", "نصائح متخصصة", "خطة عمل مفصلة"],
        ),
    ]
}
