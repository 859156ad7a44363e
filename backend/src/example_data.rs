//! Startup seeding of sample lists.
//!
//! When enabled via `SEED_EXAMPLE_DATA=1`, startup pushes a small sample
//! catalogue through the ordinary driving ports, so the seed path exercises
//! exactly the code paths requests do. Seeding into a non-empty store simply
//! adds the sample lists again; the in-memory store starts empty on boot.

use std::env;

use tracing::info;

use crate::domain::Error;
use crate::domain::ports::{
    AddItemRequest, AddMemberRequest, CreateListRequest, SetArchivedRequest,
    SetItemCompletedRequest,
};
use crate::inbound::http::state::HttpState;

/// Environment variable enabling startup seeding.
pub const SEED_ENV_VAR: &str = "SEED_EXAMPLE_DATA";

/// Settings controlling example data seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleDataSettings {
    enabled: bool,
}

impl ExampleDataSettings {
    /// Read the settings from the environment.
    pub fn from_env() -> Self {
        Self {
            enabled: env::var(SEED_ENV_VAR).is_ok_and(|value| value == "1"),
        }
    }

    /// Build settings with an explicit flag.
    pub fn with_enabled(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether seeding runs at startup.
    pub fn is_enabled(self) -> bool {
        self.enabled
    }
}

struct SeedItem {
    title: &'static str,
    quantity: i64,
    completed: bool,
}

struct SeedMember {
    user_id: &'static str,
    name: &'static str,
}

struct SeedList {
    name: &'static str,
    owner_id: &'static str,
    owner_name: &'static str,
    archived: bool,
    members: &'static [SeedMember],
    items: &'static [SeedItem],
}

const SAMPLE_LISTS: &[SeedList] = &[
    SeedList {
        name: "Groceries",
        owner_id: "user-1",
        owner_name: "Alex",
        archived: false,
        members: &[SeedMember {
            user_id: "user-2",
            name: "Jane",
        }],
        items: &[
            SeedItem {
                title: "Milk",
                quantity: 2,
                completed: false,
            },
            SeedItem {
                title: "Bread",
                quantity: 1,
                completed: true,
            },
            SeedItem {
                title: "Eggs",
                quantity: 12,
                completed: false,
            },
            SeedItem {
                title: "Apples",
                quantity: 6,
                completed: false,
            },
        ],
    },
    SeedList {
        name: "Hardware Store",
        owner_id: "user-2",
        owner_name: "Jane",
        archived: false,
        members: &[SeedMember {
            user_id: "user-1",
            name: "Alex",
        }],
        items: &[
            SeedItem {
                title: "Screwdriver",
                quantity: 1,
                completed: false,
            },
            SeedItem {
                title: "Nails",
                quantity: 100,
                completed: false,
            },
            SeedItem {
                title: "Paint",
                quantity: 2,
                completed: true,
            },
        ],
    },
    SeedList {
        name: "Party Supplies",
        owner_id: "user-1",
        owner_name: "Alex",
        archived: true,
        members: &[],
        items: &[
            SeedItem {
                title: "Balloons",
                quantity: 20,
                completed: true,
            },
            SeedItem {
                title: "Cake",
                quantity: 1,
                completed: true,
            },
            SeedItem {
                title: "Candles",
                quantity: 10,
                completed: true,
            },
        ],
    },
    SeedList {
        name: "Office Supplies",
        owner_id: "user-1",
        owner_name: "Alex",
        archived: false,
        members: &[SeedMember {
            user_id: "user-3",
            name: "Bob",
        }],
        items: &[
            SeedItem {
                title: "Pens",
                quantity: 12,
                completed: false,
            },
            SeedItem {
                title: "Paper",
                quantity: 500,
                completed: false,
            },
            SeedItem {
                title: "Stapler",
                quantity: 1,
                completed: true,
            },
        ],
    },
];

async fn seed_one(state: &HttpState, seed: &SeedList) -> Result<(), Error> {
    let list = state
        .lists
        .create_list(CreateListRequest {
            name: Some(seed.name.to_owned()),
            owner_id: Some(seed.owner_id.to_owned()),
            owner_name: Some(seed.owner_name.to_owned()),
        })
        .await?;
    let list_id = list.id().as_str().to_owned();

    for member in seed.members {
        state
            .members
            .add_member(AddMemberRequest {
                list_id: list_id.clone(),
                name: Some(member.name.to_owned()),
                user_id: Some(member.user_id.to_owned()),
            })
            .await?;
    }

    for item in seed.items {
        let created = state
            .items
            .add_item(AddItemRequest {
                list_id: list_id.clone(),
                title: Some(item.title.to_owned()),
                quantity: Some(item.quantity),
            })
            .await?;
        if item.completed {
            state
                .items
                .set_item_completed(SetItemCompletedRequest {
                    list_id: list_id.clone(),
                    item_id: created.id().value(),
                    done: true,
                })
                .await?;
        }
    }

    if seed.archived {
        state
            .lists
            .set_archived(SetArchivedRequest {
                list_id: list_id.clone(),
                caller: list.owner_id().clone(),
                archived: true,
            })
            .await?;
    }

    Ok(())
}

/// Apply the sample catalogue on startup when enabled.
///
/// Returns the number of lists seeded; zero when seeding is disabled.
pub async fn seed_example_data(
    settings: ExampleDataSettings,
    state: &HttpState,
) -> Result<usize, Error> {
    if !settings.is_enabled() {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(0);
    }

    for seed in SAMPLE_LISTS {
        seed_one(state, seed).await?;
    }

    info!(count = SAMPLE_LISTS.len(), "example data seeded");
    Ok(SAMPLE_LISTS.len())
}
