/// Everything about the tutor that the pages print verbatim.
pub struct SiteProfile {
    pub name: &'static str,
    pub subject: &'static str,
    pub tagline: &'static str,
    pub blurb: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub copyright_year: u16,
    pub bio: &'static [&'static str],
    pub qualifications: &'static [&'static str],
    pub approach: &'static [(&'static str, &'static str)],
    pub stats: &'static [Stat],
}

pub struct Stat {
    pub glyph: &'static str,
    pub number: &'static str,
    pub label: &'static str,
}

pub const PROFILE: SiteProfile = SiteProfile {
    name: "الأستاذ محمد",
    subject: "أستاذ الرياضيات",
    tagline: "أستاذ الرياضيات المتخصص في التعليم الثانوي. نقدم دروساً مبسطة وشاملة لمساعدتك على التفوق.",
    blurb: "أستاذ الرياضيات للمستوى الثانوي، متخصص في التدريس والتكوين التربوي.",
    phone: "+212 600 000 000",
    email: "contact@example.com",
    copyright_year: 2024,
    bio: &[
        "أستاذ الرياضيات بالتعليم الثانوي التأهيلي، أرافق تلاميذ الباكالوريا منذ أكثر من عشر سنوات.",
        "أؤمن بأن الرياضيات تُفهم ولا تُحفظ، لذلك أحرص على ربط كل مفهوم بأمثلة ملموسة وتمارين متدرجة.",
    ],
    qualifications: &[
        "إجازة في الرياضيات الأساسية",
        "شهادة التأهيل التربوي",
        "مصحح معتمد لامتحانات الباكالوريا الوطنية",
    ],
    approach: &[
        ("🎯", "شرح مبسط ومركز على الأساسيات"),
        ("📝", "تمارين محلولة بعد كل درس"),
        ("🤝", "متابعة فردية وإجابة عن الأسئلة"),
    ],
    stats: &[
        Stat { glyph: "📘", number: "50+", label: "درس" },
        Stat { glyph: "🎥", number: "100+", label: "فيديو" },
        Stat { glyph: "📄", number: "30+", label: "ملف PDF" },
        Stat { glyph: "👥", number: "500+", label: "طالب" },
    ],
};
