//! Builds export snapshots from domain entities.

use super::models::{BoardInfo, BoardSnapshot, CardExport, ListExport, MemberExport};
use crate::{Board, Card, List, Member, User};
use chrono::SecondsFormat;
use corkboard_core::{BoardResult, UserId};

pub struct SnapshotBuilder;

impl SnapshotBuilder {
    /// Build an ordered snapshot of one board: members by (role, username),
    /// lists by (position, id), cards by (list, position, id).
    ///
    /// Roles compare by their lowercase string form, so the member ordering
    /// is admin, mentor, spectator, student.
    pub fn build(
        board: &Board,
        members: &[Member],
        users: &[User],
        lists: &[List],
        cards: &[Card],
    ) -> BoardSnapshot {
        let username = |user_id: UserId| {
            users
                .iter()
                .find(|u| u.id == user_id)
                .map(|u| u.username.clone())
                // Memberships always reference a known identity; the id is a
                // readable fallback if the mirror is ever out of sync.
                .unwrap_or_else(|| user_id.to_string())
        };

        let mut member_exports: Vec<MemberExport> = members
            .iter()
            .filter(|m| m.board_id == board.id)
            .map(|m| MemberExport {
                username: username(m.user_id),
                role: m.role,
            })
            .collect();
        member_exports.sort_by(|a, b| {
            (a.role.as_str(), a.username.as_str()).cmp(&(b.role.as_str(), b.username.as_str()))
        });

        let mut list_exports: Vec<&List> = lists.iter().filter(|l| l.board_id == board.id).collect();
        list_exports.sort_by_key(|l| (l.position, l.id));

        let mut card_exports: Vec<&Card> = cards.iter().filter(|c| c.board_id == board.id).collect();
        card_exports.sort_by_key(|c| (c.list_id, c.position, c.id));

        BoardSnapshot {
            board: BoardInfo {
                id: board.id,
                name: board.name.clone(),
                join_code: board.join_code.clone(),
            },
            members: member_exports,
            lists: list_exports
                .into_iter()
                .map(|l| ListExport {
                    id: l.id,
                    title: l.title.clone(),
                    position: l.position,
                })
                .collect(),
            cards: card_exports
                .into_iter()
                .map(|c| CardExport {
                    id: c.id,
                    list_id: c.list_id,
                    title: c.title.clone(),
                    desc: c.desc.clone(),
                    position: c.position,
                    created_at: c.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                })
                .collect(),
        }
    }

    /// Serialize a snapshot to pretty-printed JSON.
    pub fn to_json(snapshot: &BoardSnapshot) -> BoardResult<String> {
        serde_json::to_string_pretty(snapshot)
            .map_err(|e| corkboard_core::BoardError::Serialization(e.to_string()))
    }
}
