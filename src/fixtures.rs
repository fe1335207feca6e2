//! Static fixture data.
//!
//! All questions, comments and settings entries the client shows are
//! hardcoded here in place of a backend.

use crate::model::{Comment, EducationLevel, Post, Record};

const LOREM_LONG: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Vivamus pellentesque eget diam vitae accumsan. Fusce sed risus in nisi semper malesuada quis sed sem. Orci varius natoque penatibus et magnis dis parturient montes, nascetur ridiculus mus. Duis efficitur mauris quis nisl interdum elementum a varius lectus.";
const LOREM_SHORT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Vivamus pellentesque eget diam vitae accumsan. Fusce sed risus in nisi semper malesuada quis sed sem. Orci varius natoque penatibus et magnis dis parturient montes, nascetur ridiculus mus.";
const LOREM_CARD: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Integer facilisis, turpis ac gravida semper, nisi nisi viverra leo";

/// Recent questions listed on the "Recent Question" screen.
///
/// # Returns
/// * `Vec<Record>` - Ten questions with ids "1" to "10"
pub fn recent_questions() -> Vec<Record> {
    vec![
        Record::new("1", "Rekayasa Perangkat Lunak", LOREM_LONG, "", 19),
        Record::new("2", "Pemrograman Berbasis Platform", LOREM_LONG, "", 19),
        Record::new("3", "Keamanan Data & Informasi", LOREM_SHORT, "", 19).with_image_placeholder(),
        Record::new("4", "Pemrograman Dasar", LOREM_LONG, "", 19),
        Record::new("5", "Basis Data", LOREM_SHORT, "", 19).with_image_placeholder(),
        Record::new(
            "6",
            "Jaringan Komputer",
            "Consectetur adipiscing elit. Vivamus pellentesque eget diam vitae accumsan. Fusce sed risus in nisi semper malesuada quis sed sem. Orci varius natoque penatibus et magnis dis parturient montes, nascetur ridiculus mus. Duis efficitur mauris quis nisl interdum elementum a varius lectus.",
            "",
            25,
        ),
        Record::new(
            "7",
            "Kecerdasan Buatan",
            "Vivamus pellentesque eget diam vitae accumsan. Fusce sed risus in nisi semper malesuada quis sed sem. Orci varius natoque penatibus et magnis dis parturient montes, nascetur ridiculus mus. Duis efficitur mauris quis nisl interdum elementum a varius lectus.",
            "",
            30,
        )
        .with_image_placeholder(),
        Record::new(
            "8",
            "Analisis Algoritma",
            "Fusce sed risus in nisi semper malesuada quis sed sem. Orci varius natoque penatibus et magnis dis parturient montes, nascetur ridiculus mus. Duis efficitur mauris quis nisl interdum elementum a varius lectus.",
            "",
            15,
        ),
        Record::new(
            "9",
            "Struktur Data",
            "Orci varius natoque penatibus et magnis dis parturient montes, nascetur ridiculus mus. Duis efficitur mauris quis nisl interdum elementum a varius lectus. Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
            "",
            22,
        )
        .with_image_placeholder(),
        Record::new(
            "10",
            "Sistem Operasi",
            "Duis efficitur mauris quis nisl interdum elementum a varius lectus. Lorem ipsum dolor sit amet, consectetur adipiscing elit. Vivamus pellentesque eget diam vitae accumsan.",
            "",
            18,
        ),
    ]
}

/// Records searched by the search screen.
pub fn search_records() -> Vec<Record> {
    vec![
        Record::new(
            "1",
            "apa yang dimaksud dengan mikrotik?",
            LOREM_LONG,
            "Jaringan Komputer",
            19,
        ),
        Record::new("2", "apa itu mikrotik?", LOREM_LONG, "Jaringan Komputer", 19),
        Record::new(
            "3",
            "Bagaimana cara kerja React Native?",
            "React Native memungkinkan Anda membangun aplikasi seluler menggunakan JavaScript dan React. Ini menjembatani ke API asli, memungkinkan kinerja yang mendekati asli.",
            "Pemrograman Web",
            25,
        ),
    ]
}

/// Cards in the landing page "Recent Question" section.
pub fn landing_recent_questions() -> Vec<Record> {
    vec![
        Record::new("1", "Rekayasa Perangkat Lunak", LOREM_CARD, "", 19),
        Record::new("2", "Pemrograman Berbasis Platform", LOREM_CARD, "", 19),
        Record::new("3", "Data Science", LOREM_CARD, "", 25),
    ]
}

/// Cards in the landing page "Recent Answered" section.
pub fn landing_recent_answered() -> Vec<Record> {
    vec![
        Record::new("4", "Rekayasa Perangkat Lunak", LOREM_CARD, "", 19),
        Record::new("5", "Pemrograman Berbasis Platform", LOREM_CARD, "", 19),
    ]
}

/// The post shown when the detail screen is opened without parameters.
///
/// Its comments are also shown under every other question.
pub fn sample_post() -> Post {
    Post {
        id: "post1".to_string(),
        category: "Jaringan Komputer".to_string(),
        question: "Apa yang dimaksud dengan Mikrotik?".to_string(),
        content: "Saya baru belajar jaringan dan sering mendengar istilah Mikrotik. Bisa tolong jelaskan apa itu Mikrotik, fungsi utamanya, dan mungkin contoh penggunaannya dalam skala kecil?".to_string(),
        likes: 193,
        attachment: None,
        image_placeholder: false,
        comments: vec![
            Comment {
                id: "comment1".to_string(),
                heading: "Re: Apa yang dimaksud dengan Mikrotik?".to_string(),
                text: "Mikrotik itu sebenarnya nama perusahaan Latvia yang mengembangkan perangkat keras dan perangkat lunak untuk jaringan komputer. Produknya yang paling terkenal itu RouterOS dan RouterBOARD.".to_string(),
                liked_by_current_user: true,
            },
            Comment {
                id: "comment2".to_string(),
                heading: "Re: Apa yang dimaksud dengan Mikrotik?".to_string(),
                text: "Singkatnya, Mikrotik bisa dipakai buat ngatur bandwidth, firewall, VPN, hotspot, dan banyak lagi. Cocok buat warnet, kantor kecil, atau bahkan rumah kalau mau lebih advance.".to_string(),
                liked_by_current_user: false,
            },
        ],
    }
}

/// Education levels offered at the end of registration.
pub const EDUCATION_LEVELS: [EducationLevel; 4] = [
    EducationLevel { id: "elementary", label: "Elementary School" },
    EducationLevel { id: "junior_high", label: "Junior High School" },
    EducationLevel { id: "senior_high", label: "Senior High School" },
    EducationLevel { id: "college", label: "College" },
];

/// Entry on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsItem {
    pub id: &'static str,
    pub label: &'static str,
    /// Rendered in red
    pub destructive: bool,
}

/// Titled group of settings entries.
#[derive(Debug, Clone, Copy)]
pub struct SettingsSection {
    pub title: &'static str,
    pub items: &'static [SettingsItem],
}

pub const SETTINGS: [SettingsSection; 3] = [
    SettingsSection {
        title: "Account Management",
        items: &[
            SettingsItem { id: "change_email", label: "Change Email", destructive: false },
            SettingsItem { id: "change_password", label: "Change Password", destructive: false },
        ],
    },
    SettingsSection {
        title: "Privacy Policy",
        items: &[
            SettingsItem { id: "terms_of_service", label: "Terms of Service", destructive: false },
            SettingsItem { id: "privacy_policy_doc", label: "Privacy Policy", destructive: false },
        ],
    },
    SettingsSection {
        title: "App Settings",
        items: &[
            SettingsItem { id: "change_language", label: "Change Language", destructive: false },
            SettingsItem { id: "log_out", label: "Log Out", destructive: true },
        ],
    },
];

/// Flattened settings entries in display order.
pub fn settings_items() -> Vec<SettingsItem> {
    SETTINGS.iter().flat_map(|section| section.items.iter().copied()).collect()
}

pub const TERMS_OF_SERVICE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. In non tortor at enim varius gravida. Aliquam faucibus justo ac lacus vehicula, at rutrum velit egestas. Suspendisse auctor, tortor at bibendum vestibulum, est purus interdum leo, sit amet vulputate est lectus sed odio. In elit dui, malesuada vitae iaculis vel, vehicula et nunc. Maecenas convallis et libero sit amet imperdiet. Cras in massa ornare, ullamcorper nisi nec, malesuada nisi.

In hac habitasse platea dictumst. Pellentesque habitant morbi tristique senectus et netus et malesuada fames ac turpis egestas. Orci varius natoque penatibus et magnis dis parturient montes, nascetur ridiculus mus. In sed eleifend mi, sit amet tempor odio. Cras a auctor mi. Aenean quis nisi eu elit elementum molestie.

Donec lobortis sapien velit, quis pulvinar libero pulvinar ac. Integer quis lacus sodales, dignissim dui ut, sollicitudin dolor. Curabitur sit amet nibh laoreet, accumsan mi sit amet, malesuada orci. Nam nisi elit, tristique non consequat sed, molestie at neque.

In sit amet est ut augue elementum dictum. Pellentesque a diam odio. Curabitur venenatis lacus id mi malesuada pellentesque. Cras lacus ex, cursus eu quam eu, ornare placerat quam.

Donec in ornare turpis. Ut id fringilla neque, eget accumsan arcu. Morbi lacinia ultricies nisl at pellentesque. Maecenas ipsum mi, efficitur ut molestie id, placerat a leo. Vivamus id lacus est.";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_recent_questions_ids_are_unique() {
        let questions = recent_questions();
        assert_eq!(questions.len(), 10);
        let ids: HashSet<_> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_sample_post_seeds_first_comment_liked() {
        let post = sample_post();
        assert_eq!(post.likes, 193);
        assert!(post.comments[0].liked_by_current_user);
        assert!(!post.comments[1].liked_by_current_user);
    }

    #[test]
    fn test_settings_items_flatten_in_order() {
        let items = settings_items();
        assert_eq!(items.len(), 6);
        assert_eq!(items[2].id, "terms_of_service");
        assert!(items[5].destructive);
    }
}
