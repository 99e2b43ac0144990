use crate::config::CONTACT_EMAIL;

#[derive(Debug, PartialEq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ServiceDetail {
    pub title: &'static str,
    pub who_for: &'static str,
    pub what_we_do: &'static str,
    pub use_cases: &'static [&'static str],
    pub how_it_works: &'static [&'static str],
    pub outcome: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ServiceCard {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
    pub expanded: ServiceDetail,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Accent {
    Primary,
    Secondary,
    Tertiary,
}

impl Accent {
    pub fn css_var(self) -> &'static str {
        match self {
            Accent::Primary => "var(--primary)",
            Accent::Secondary => "var(--secondary)",
            Accent::Tertiary => "var(--accent)",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct CoreSystem {
    pub number: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub aside: &'static str,
    pub accent: Accent,
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub initials: &'static str,
    pub accent: Accent,
}

#[derive(Debug, PartialEq)]
pub struct Phase {
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Foundation",
        description: "Started with one goal: make operations simpler and more reliable.",
    },
    TimelineEntry {
        title: "Delivery",
        description: "Built automation systems for teams moving fast, without breaking processes.",
    },
    TimelineEntry {
        title: "Applied AI",
        description: "Applied AI where it made sense: speed, accuracy, and decision support.",
    },
    TimelineEntry {
        title: "Refinement",
        description: "Refining systems over time so they stay useful as the business changes.",
    },
];

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        id: 1,
        title: "Operational Automation",
        description: "Remove repetitive manual work and make everyday processes run reliably.",
        bullets: &[
            "Replace manual admin with automated workflows",
            "Reduce errors, delays, and handoffs",
            "Systems that run in the background without babysitting",
        ],
        expanded: ServiceDetail {
            title: "Operational Automation",
            who_for: "Teams spending too much time on repetitive tasks, internal admin, or manual coordination.",
            what_we_do: "We design and build automation that replaces day-to-day operational work with reliable systems. This includes internal processes, notifications, approvals, syncs, and background jobs that run consistently without human intervention.",
            use_cases: &[
                "Internal task and approval workflows",
                "Notifications, reminders, and status updates",
                "Data syncing between tools",
                "Scheduled checks, updates, and housekeeping tasks",
            ],
            how_it_works: &[
                "Map the current manual process",
                "Identify failure points and inefficiencies",
                "Design a clean automation flow",
                "Build, test, and deploy",
                "Monitor and refine",
            ],
            outcome: "Less admin. Fewer mistakes. Operations that don't rely on memory or manual effort.",
        },
    },
    ServiceCard {
        id: 2,
        title: "Data Flow and Processing",
        description: "Clean, structured, and reliable data across your systems.",
        bullets: &[
            "Ingest, clean, and normalise data",
            "Deduplication and enrichment",
            "Reliable data movement between tools",
        ],
        expanded: ServiceDetail {
            title: "Data Flow and Processing",
            who_for: "Teams dealing with messy, duplicated, or inconsistent data across multiple platforms.",
            what_we_do: "We build data pipelines that collect, clean, enrich, and move data between systems in a predictable and controlled way. This ensures your data is usable, trustworthy, and aligned across tools.",
            use_cases: &[
                "Importing data from multiple sources",
                "Deduplicating and cleaning records",
                "Enriching data with external sources",
                "Scheduled or event-based data syncs",
            ],
            how_it_works: &[
                "Define data sources and destinations",
                "Design a consistent data structure",
                "Build transformation and validation logic",
                "Implement error handling and logging",
                "Deploy and monitor data health",
            ],
            outcome: "Accurate data you can actually rely on, without manual cleanup.",
        },
    },
    ServiceCard {
        id: 3,
        title: "Systems Integration and Architecture",
        description: "Designing how your tools work together before anything is built.",
        bullets: &[
            "API-based integrations",
            "Event-driven system design",
            "Scalable, documented architecture",
        ],
        expanded: ServiceDetail {
            title: "Systems Integration and Architecture",
            who_for: "Teams using multiple tools that don't communicate cleanly, or systems that have grown without a clear structure.",
            what_we_do: "We design and implement the architecture that connects your tools into a coherent system. This includes how data moves, how events trigger actions, and how failures are handled.",
            use_cases: &[
                "Tool-to-tool integrations",
                "Event-triggered workflows",
                "Permission and access control design",
                "System documentation and handover",
            ],
            how_it_works: &[
                "Review existing tools and workflows",
                "Design a scalable integration architecture",
                "Define triggers, flows, and fallbacks",
                "Build and test integrations",
                "Document and hand over the system",
            ],
            outcome: "A system that's designed, not duct-taped.",
        },
    },
    ServiceCard {
        id: 4,
        title: "AI-Enabled Workflows",
        description: "Practical AI built into real systems. Not bolted on.",
        bullets: &[
            "AI used where it saves time",
            "Human-in-the-loop by design",
            "Guardrails and control built in",
        ],
        expanded: ServiceDetail {
            title: "AI-Enabled Workflows",
            who_for: "Teams wanting to use AI safely and usefully inside existing workflows.",
            what_we_do: "We integrate AI into operational systems where it genuinely reduces workload. This includes classification, summarisation, drafting, and decision support, always with oversight and control.",
            use_cases: &[
                "Email or ticket classification",
                "Content and report drafting",
                "Summarising meetings or documents",
                "Internal knowledge workflows",
            ],
            how_it_works: &[
                "Identify high-impact AI opportunities",
                "Define boundaries and human oversight",
                "Integrate AI into workflows",
                "Add logging, versioning, and rollback",
                "Test and refine usage",
            ],
            outcome: "AI that supports your team instead of creating risk or noise.",
        },
    },
    ServiceCard {
        id: 5,
        title: "Revenue and Pipeline Systems",
        description: "Reliable lead handling, follow-ups, and visibility.",
        bullets: &[
            "Lead capture and routing",
            "CRM lifecycle automation",
            "Outreach and follow-up systems",
        ],
        expanded: ServiceDetail {
            title: "Revenue and Pipeline Systems",
            who_for: "Businesses losing leads, missing follow-ups, or lacking visibility into their pipeline.",
            what_we_do: "We build systems that manage leads and opportunities from first contact through to close, ensuring nothing falls through the cracks.",
            use_cases: &[
                "Lead capture and qualification",
                "CRM automation and hygiene",
                "Outreach and follow-up sequences",
                "Pipeline reporting and visibility",
            ],
            how_it_works: &[
                "Map your revenue lifecycle",
                "Define rules for routing and follow-ups",
                "Build automation around the CRM",
                "Add reporting and alerts",
                "Monitor and improve over time",
            ],
            outcome: "Consistent follow-up, clearer pipelines, and fewer missed opportunities.",
        },
    },
    ServiceCard {
        id: 6,
        title: "Ongoing Optimisation and Support",
        description: "Keeping systems healthy as your business evolves.",
        bullets: &[
            "Monitoring and maintenance",
            "Incremental improvements",
            "Long-term system support",
        ],
        expanded: ServiceDetail {
            title: "Ongoing Optimisation and Support",
            who_for: "Teams who want systems that improve over time, not break quietly.",
            what_we_do: "We provide ongoing support, monitoring, and optimisation for the systems we build. This ensures reliability, performance, and adaptability as your business changes.",
            use_cases: &[
                "System monitoring and alerts",
                "Workflow improvements",
                "New automation requests",
                "Performance and cost optimisation",
            ],
            how_it_works: &[
                "Continuous monitoring",
                "Regular reviews and improvements",
                "Rapid response to issues",
                "Strategic system evolution",
            ],
            outcome: "Systems that stay reliable and relevant long after launch.",
        },
    },
];

pub const CORE_SYSTEMS: &[CoreSystem] = &[
    CoreSystem {
        number: "01",
        title: "Automation Architecture",
        body: "We design and automate operational workflows so they run consistently, with fewer manual steps and fewer points of failure.",
        aside: "The result: fewer errors, less manual work, and systems that scale without slowing you down.",
        accent: Accent::Primary,
    },
    CoreSystem {
        number: "02",
        title: "AI-Driven Processes",
        body: "We apply AI where it makes practical sense. Speeding up repeatable tasks, supporting decisions, and reducing cognitive load.",
        aside: "Practical by design. Built to be used.",
        accent: Accent::Secondary,
    },
    CoreSystem {
        number: "03",
        title: "Data Simplification & Clarity",
        body: "Your data shouldn't slow you down. We structure and surface it so you can see what's happening without digging.",
        aside: "And what to do next.",
        accent: Accent::Tertiary,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Mindstream didn't just fix our workflow. They rebuilt it into something that finally works.",
        initials: "A.D.",
        accent: Accent::Primary,
    },
    Testimonial {
        quote: "Clear thinking, well-built systems, and no unnecessary complexity. Working with them changed how we operate day to day.",
        initials: "S.M.",
        accent: Accent::Secondary,
    },
    Testimonial {
        quote: "Fast, structured, and grounded in the realities of a growing business. Exactly what we needed.",
        initials: "R.K.",
        accent: Accent::Tertiary,
    },
];

pub const PHASES: &[Phase] = &[
    Phase {
        title: "Discovery",
        description: "Deep analysis of your operations and pain points",
    },
    Phase {
        title: "Design",
        description: "Strategic architecture built for clarity and scale",
    },
    Phase {
        title: "Deployment",
        description: "Seamless integration with ongoing support",
    },
];

const CONTACT_SUBJECT: &str = "Project enquiry \u{2013} Project name";

const CONTACT_TEMPLATE: &[&str] = &[
    "Project name:",
    "Brief description of the problem:",
    "Current tools or systems:",
    "What isn\u{2019}t working right now:",
    "Timeline or urgency:",
    "What would a successful outcome look like:",
];

/// `mailto:` link that opens a pre-filled enquiry.
pub fn contact_mailto() -> String {
    let body = CONTACT_TEMPLATE.join("\n\n");
    format!(
        "mailto:{}?subject={}&body={}",
        CONTACT_EMAIL,
        urlencoding::encode(CONTACT_SUBJECT),
        urlencoding::encode(&body)
    )
}

/// Initials without punctuation, for avatar badges.
pub fn badge_letters(initials: &str) -> String {
    initials.chars().filter(|c| c.is_alphanumeric()).collect()
}
