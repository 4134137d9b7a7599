//! How each paginated aggregate counts and merges its pages

use super::types::Paginated;
use crate::model::{Forum, Guild, Plays, Things, User};

fn len(items: usize) -> u64 {
    items as u64
}

/// Buddies and guilds page together; the larger list drives pagination.
impl Paginated for User {
    fn declared_total(&self) -> Option<u64> {
        let buddies = self.buddies.as_ref().map(|b| b.total);
        let guilds = self.guilds.as_ref().map(|g| g.total);
        buddies.max(guilds)
    }

    fn page_items(&self) -> u64 {
        let buddies = self.buddies.as_ref().map_or(0, |b| len(b.buddies.len()));
        let guilds = self.guilds.as_ref().map_or(0, |g| len(g.guilds.len()));
        buddies.max(guilds)
    }

    fn merge_page(&mut self, next: Self) {
        if let Some(next_buddies) = next.buddies {
            match self.buddies.as_mut() {
                Some(buddies) => buddies.buddies.extend(next_buddies.buddies),
                None => self.buddies = Some(next_buddies),
            }
        }
        if let Some(next_guilds) = next.guilds {
            match self.guilds.as_mut() {
                Some(guilds) => guilds.guilds.extend(next_guilds.guilds),
                None => self.guilds = Some(next_guilds),
            }
        }
    }
}

impl Paginated for Forum {
    fn declared_total(&self) -> Option<u64> {
        Some(self.num_threads)
    }

    fn page_items(&self) -> u64 {
        len(self.threads.len())
    }

    fn merge_page(&mut self, next: Self) {
        self.threads.extend(next.threads);
    }
}

impl Paginated for Guild {
    fn declared_total(&self) -> Option<u64> {
        self.members.as_ref().map(|m| m.count)
    }

    fn page_items(&self) -> u64 {
        self.members.as_ref().map_or(0, |m| len(m.members.len()))
    }

    fn merge_page(&mut self, next: Self) {
        if let Some(next_members) = next.members {
            match self.members.as_mut() {
                Some(members) => members.members.extend(next_members.members),
                None => self.members = Some(next_members),
            }
        }
    }
}

impl Paginated for Plays {
    fn declared_total(&self) -> Option<u64> {
        Some(self.total)
    }

    fn page_items(&self) -> u64 {
        len(self.plays.len())
    }

    fn merge_page(&mut self, next: Self) {
        self.plays.extend(next.plays);
    }
}

/// Comment pages of a batch lookup; every thing pages its comments
/// independently, so the thing with the most comments drives pagination.
impl Paginated for Things {
    fn declared_total(&self) -> Option<u64> {
        self.things
            .iter()
            .filter_map(|t| t.comments.as_ref().map(|c| c.total_items))
            .max()
    }

    fn page_items(&self) -> u64 {
        self.things
            .iter()
            .filter_map(|t| t.comments.as_ref().map(|c| len(c.comments.len())))
            .max()
            .unwrap_or(0)
    }

    fn merge_page(&mut self, next: Self) {
        for next_thing in next.things {
            let Some(next_comments) = next_thing.comments else {
                continue;
            };
            let Some(thing) = self.things.iter_mut().find(|t| t.id == next_thing.id) else {
                continue;
            };
            match thing.comments.as_mut() {
                Some(comments) => comments.comments.extend(next_comments.comments),
                None => thing.comments = Some(next_comments),
            }
        }
    }
}
