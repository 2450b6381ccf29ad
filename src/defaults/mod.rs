//! Static default content table.
//!
//! Version-controlled baseline dataset mirroring the shape of every
//! collection. Read-only at runtime; used both as fallback when a document
//! is absent and as the seed payload.

use serde_json::Value;

use crate::models::{
    AboutInfo, AboutMessage, Advisor, CategoryId, CommunityDoc, CommunityNewsItem,
    CompositionEntry, ContactInfo, DirectorProfile, HeroSlide, HomeConfig, MainService, Milestone,
    Program, ProgramCategory, ProgramsDoc, SectionToggles, SiteAsset, SiteAssets, SiteInfo,
    TeamCategory, TeamDoc, TeamMember,
};

/// Default document for a category as a raw JSON value.
pub fn document(category: CategoryId) -> Value {
    let result = match category {
        CategoryId::SiteInfo => serde_json::to_value(site_info()),
        CategoryId::AboutInfo => serde_json::to_value(about_info()),
        CategoryId::Programs => serde_json::to_value(programs()),
        CategoryId::Team => serde_json::to_value(team()),
        CategoryId::Community => serde_json::to_value(community()),
        CategoryId::HomeConfig => serde_json::to_value(home_config()),
        CategoryId::SiteAssets => serde_json::to_value(site_assets()),
    };
    // Compiled-in structs with derived Serialize cannot fail to serialize.
    result.expect("static default content serializes")
}

pub fn site_info() -> SiteInfo {
    SiteInfo {
        name: "Riverside Community Service Center".to_string(),
        established: "2009-03-01".to_string(),
        purpose: "Supporting children, families, and seniors in the Riverside district \
                  through counseling, developmental therapy, and community programs."
            .to_string(),
        core_values: vec![
            "Respect".to_string(),
            "Growth".to_string(),
            "Community".to_string(),
            "Trust".to_string(),
        ],
        staff_composition: vec![
            CompositionEntry {
                category: "Therapists".to_string(),
                count: 8,
            },
            CompositionEntry {
                category: "Special education teachers".to_string(),
                count: 5,
            },
            CompositionEntry {
                category: "Social workers".to_string(),
                count: 4,
            },
            CompositionEntry {
                category: "Administration".to_string(),
                count: 3,
            },
        ],
        client_composition: vec![
            CompositionEntry {
                category: "Children".to_string(),
                count: 120,
            },
            CompositionEntry {
                category: "Adolescents".to_string(),
                count: 45,
            },
            CompositionEntry {
                category: "Adults".to_string(),
                count: 30,
            },
            CompositionEntry {
                category: "Seniors".to_string(),
                count: 25,
            },
        ],
        contact: ContactInfo {
            address: "24 Willow Lane, Riverside District".to_string(),
            phone: "555-0142".to_string(),
            fax: "555-0143".to_string(),
            email: "hello@riverside-center.example".to_string(),
            hours: "Mon-Fri 09:00-18:00, Sat 09:00-13:00".to_string(),
            transportation: vec![
                "Bus 12, 47 to Willow Lane stop".to_string(),
                "Riverside station, exit 3, 5 minute walk".to_string(),
            ],
        },
        main_services: vec![
            MainService {
                id: "svc-counseling".to_string(),
                title: "Counseling".to_string(),
                description: "Individual and family counseling sessions.".to_string(),
                details: vec![
                    "Play therapy".to_string(),
                    "Family counseling".to_string(),
                    "Psychological assessment".to_string(),
                ],
                start_year: Some(2009),
                order: 1,
            },
            MainService {
                id: "svc-therapy".to_string(),
                title: "Developmental therapy".to_string(),
                description: "Speech, occupational, and sensory integration therapy.".to_string(),
                details: vec![
                    "Speech-language therapy".to_string(),
                    "Sensory integration".to_string(),
                ],
                start_year: Some(2011),
                order: 2,
            },
            MainService {
                id: "svc-community".to_string(),
                title: "Community programs".to_string(),
                description: "Seasonal camps, parent education, and volunteer programs."
                    .to_string(),
                details: vec![],
                start_year: Some(2014),
                order: 3,
            },
        ],
    }
}

pub fn about_info() -> AboutInfo {
    AboutInfo {
        director: DirectorProfile {
            name: "Dr. Miriam Hale".to_string(),
            position: "Director".to_string(),
            education: vec![
                "Ph.D. in Clinical Psychology, Lakeview University".to_string(),
                "M.A. in Child Development, Lakeview University".to_string(),
            ],
            career: vec![
                "Senior therapist, Lakeview Children's Clinic (2001-2008)".to_string(),
                "Founding director, Riverside Community Service Center (2009-)".to_string(),
            ],
            committees: vec![
                "Riverside District Child Welfare Committee".to_string(),
                "Regional Association of Community Centers".to_string(),
            ],
            certifications: vec![
                "Licensed Clinical Psychologist".to_string(),
                "Certified Play Therapy Supervisor".to_string(),
            ],
            message: AboutMessage {
                title: "A place to grow together".to_string(),
                paragraphs: vec![
                    "Since 2009, our center has walked alongside families in the Riverside \
                     district."
                        .to_string(),
                    "Every child deserves a community that believes in their growth. Our \
                     therapists, teachers, and social workers work as one team to make that \
                     belief practical."
                        .to_string(),
                    "Thank you for trusting us with your family's story.".to_string(),
                ],
            },
        },
        milestones: vec![
            Milestone {
                year: 2009,
                month: 3,
                event: "Center opened with two counseling rooms".to_string(),
            },
            Milestone {
                year: 2011,
                month: 9,
                event: "Developmental therapy wing established".to_string(),
            },
            Milestone {
                year: 2014,
                month: 5,
                event: "Partnership agreement with Riverside school district".to_string(),
            },
            Milestone {
                year: 2016,
                month: 11,
                event: "Regional community service award received".to_string(),
            },
            Milestone {
                year: 2016,
                month: 2,
                event: "Family counseling annex opened".to_string(),
            },
            Milestone {
                year: 2021,
                month: 7,
                event: "Center expanded to the second floor".to_string(),
            },
        ],
        advisors: vec![
            Advisor {
                id: "adv-park".to_string(),
                name: "Prof. Elena Park".to_string(),
                position: "Professor of Social Welfare, Lakeview University".to_string(),
                education: "Ph.D. in Social Welfare".to_string(),
                career: vec!["Department chair, Lakeview University".to_string()],
                order: 1,
            },
            Advisor {
                id: "adv-owens".to_string(),
                name: "Gerald Owens".to_string(),
                position: "Representative, Owens Family Foundation".to_string(),
                education: "M.B.A.".to_string(),
                career: vec!["Director, Riverside Rotary Club".to_string()],
                order: 2,
            },
            Advisor {
                id: "adv-reyes".to_string(),
                name: "Alma Reyes".to_string(),
                position: "Pharmacist, Willow Lane Pharmacy".to_string(),
                education: "Pharm.D.".to_string(),
                career: vec![],
                order: 3,
            },
            Advisor {
                id: "adv-cho".to_string(),
                name: "Daniel Cho".to_string(),
                position: "Police inspector, Riverside precinct".to_string(),
                education: "B.A. in Criminal Justice".to_string(),
                career: vec![],
                order: 4,
            },
        ],
        facilities: vec![
            "Play therapy room".to_string(),
            "Sensory integration room".to_string(),
            "Speech therapy room".to_string(),
            "Group activity hall".to_string(),
            "Parent waiting lounge".to_string(),
        ],
    }
}

pub fn programs() -> ProgramsDoc {
    ProgramsDoc {
        categories: vec![
            ProgramCategory {
                id: "cat-therapy".to_string(),
                title: "Therapy programs".to_string(),
                description: "One-to-one developmental therapy sessions.".to_string(),
                order: 1,
                programs: vec![
                    Program {
                        id: "prg-speech".to_string(),
                        title: "Speech-language therapy".to_string(),
                        goal: Some("Improve expressive and receptive language.".to_string()),
                        target: Some("Ages 3-12".to_string()),
                        content: Some("Weekly 40-minute individual sessions.".to_string()),
                        types: vec!["individual".to_string()],
                        order: 1,
                    },
                    Program {
                        id: "prg-sensory".to_string(),
                        title: "Sensory integration".to_string(),
                        goal: Some("Support sensory processing and motor planning.".to_string()),
                        target: Some("Ages 3-10".to_string()),
                        content: None,
                        types: vec!["individual".to_string()],
                        order: 2,
                    },
                    Program {
                        id: "prg-play".to_string(),
                        title: "Play therapy".to_string(),
                        goal: None,
                        target: Some("Ages 4-11".to_string()),
                        content: None,
                        types: vec!["individual".to_string()],
                        order: 3,
                    },
                ],
            },
            ProgramCategory {
                id: "cat-group".to_string(),
                title: "Group programs".to_string(),
                description: "Small-group social and learning programs.".to_string(),
                order: 2,
                programs: vec![
                    Program {
                        id: "prg-social".to_string(),
                        title: "Social skills group".to_string(),
                        goal: Some("Practice peer interaction in a guided group.".to_string()),
                        target: Some("Ages 6-12".to_string()),
                        content: Some("Eight-week cycles, groups of four.".to_string()),
                        types: vec!["group".to_string()],
                        order: 1,
                    },
                    Program {
                        id: "prg-afterschool".to_string(),
                        title: "After-school learning club".to_string(),
                        goal: None,
                        target: Some("Elementary students".to_string()),
                        content: None,
                        types: vec!["group".to_string()],
                        order: 2,
                    },
                ],
            },
            ProgramCategory {
                id: "cat-family".to_string(),
                title: "Family support".to_string(),
                description: "Programs for parents and whole families.".to_string(),
                order: 3,
                programs: vec![Program {
                    id: "prg-parent-edu".to_string(),
                    title: "Parent education course".to_string(),
                    goal: Some("Equip parents with practical coaching strategies.".to_string()),
                    target: Some("Parents and guardians".to_string()),
                    content: None,
                    types: vec!["group".to_string(), "seasonal".to_string()],
                    order: 1,
                }],
            },
        ],
    }
}

pub fn team() -> TeamDoc {
    TeamDoc {
        members: vec![
            TeamMember {
                id: "tm-hale".to_string(),
                name: "Dr. Miriam Hale".to_string(),
                category: TeamCategory::Therapist,
                specializations: vec!["Clinical psychology".to_string()],
                education: "Ph.D. in Clinical Psychology".to_string(),
                certifications: vec!["Licensed Clinical Psychologist".to_string()],
                order: 1,
            },
            TeamMember {
                id: "tm-soto".to_string(),
                name: "Irene Soto".to_string(),
                category: TeamCategory::Therapist,
                specializations: vec![
                    "Speech-language therapy".to_string(),
                    "Early intervention".to_string(),
                ],
                education: "M.S. in Speech-Language Pathology".to_string(),
                certifications: vec!["Certified Speech-Language Pathologist".to_string()],
                order: 2,
            },
            TeamMember {
                id: "tm-brandt".to_string(),
                name: "Lukas Brandt".to_string(),
                category: TeamCategory::Therapist,
                specializations: vec!["Sensory integration".to_string()],
                education: "M.S. in Occupational Therapy".to_string(),
                certifications: vec!["Registered Occupational Therapist".to_string()],
                order: 3,
            },
            TeamMember {
                id: "tm-nakamura".to_string(),
                name: "Keiko Nakamura".to_string(),
                category: TeamCategory::Teacher,
                specializations: vec!["Special education".to_string()],
                education: "B.Ed. in Special Education".to_string(),
                certifications: vec!["Special Education Teacher, Level 2".to_string()],
                order: 1,
            },
            TeamMember {
                id: "tm-ellis".to_string(),
                name: "Maya Ellis".to_string(),
                category: TeamCategory::Teacher,
                specializations: vec!["After-school learning".to_string()],
                education: "B.A. in Elementary Education".to_string(),
                certifications: vec![],
                order: 2,
            },
        ],
    }
}

pub fn community() -> CommunityDoc {
    CommunityDoc {
        items: vec![
            CommunityNewsItem {
                id: "news-summer-camp".to_string(),
                title: "Summer camp registration open".to_string(),
                content: "Registration for the 2024 summer camp is open until June 20."
                    .to_string(),
                date: "2024-06-10".to_string(),
                category: "notice".to_string(),
                order: 1,
            },
            CommunityNewsItem {
                id: "news-award".to_string(),
                title: "Center receives district volunteer award".to_string(),
                content: "Our volunteer program was recognized by the district office."
                    .to_string(),
                date: "2023-11-02".to_string(),
                category: "news".to_string(),
                order: 2,
            },
            CommunityNewsItem {
                id: "news-parent-course".to_string(),
                title: "Autumn parent education course".to_string(),
                content: "An eight-week course for parents starts September 5.".to_string(),
                date: "2023-08-21".to_string(),
                category: "notice".to_string(),
                order: 3,
            },
            CommunityNewsItem {
                id: "news-renovation".to_string(),
                title: "Second floor renovation complete".to_string(),
                content: "The expanded therapy wing is now open.".to_string(),
                date: "2021-07-30".to_string(),
                category: "news".to_string(),
                order: 4,
            },
        ],
    }
}

pub fn home_config() -> HomeConfig {
    HomeConfig {
        hero_slides: vec![
            HeroSlide {
                id: "slide-welcome".to_string(),
                title: "Welcome to Riverside".to_string(),
                subtitle: "A place to grow together".to_string(),
                description: "Counseling, therapy, and community programs for every family."
                    .to_string(),
                button_text: "Our programs".to_string(),
                button_link: "/programs".to_string(),
                background_image: Some("/images/hero-main.jpg".to_string()),
                background_color: None,
                order: 1,
                enabled: true,
            },
            HeroSlide {
                id: "slide-camp".to_string(),
                title: "Summer camp 2024".to_string(),
                subtitle: "Registration open".to_string(),
                description: "Join us for four weeks of outdoor learning.".to_string(),
                button_text: "Learn more".to_string(),
                button_link: "/community".to_string(),
                background_image: None,
                background_color: Some("#2d6a4f".to_string()),
                order: 2,
                enabled: true,
            },
        ],
        sections: SectionToggles::default(),
    }
}

pub fn site_assets() -> SiteAssets {
    SiteAssets {
        assets: vec![
            SiteAsset {
                key: "logo".to_string(),
                url: "/images/logo.svg".to_string(),
                alt: "Riverside Community Service Center".to_string(),
            },
            SiteAsset {
                key: "building".to_string(),
                url: "/images/building.jpg".to_string(),
                alt: "Center building on Willow Lane".to_string(),
            },
            SiteAsset {
                key: "directorPortrait".to_string(),
                url: "/images/director.jpg".to_string(),
                alt: "Dr. Miriam Hale".to_string(),
            },
        ],
    }
}
