//! Tauri Commands for the Element List
//!
//! Exposes positional list operations to the frontend via Tauri IPC.
//! An out-of-bounds index is a regular answer (`MutationResult::IndexOutOfBounds`);
//! any other failure rejects the IPC call with an error string.

use tauri::State;
use crate::domain::{Element, Index, MutationResult};
use crate::repository::ListRepository;
use crate::AppState;

/// List all elements in order
#[tauri::command]
pub async fn list_all(state: State<'_, AppState>) -> Result<Vec<Element>, String> {
    fetch_all(state.list_repo.as_ref()).await
}

/// Insert an element at `idx` (`idx == len` appends)
#[tauri::command]
pub async fn add_element_at(
    state: State<'_, AppState>,
    idx: Index,
    elem: Element,
) -> Result<MutationResult, String> {
    add_at(state.list_repo.as_ref(), idx, elem).await
}

/// Replace the element at `idx`
#[tauri::command]
pub async fn update_element_at(
    state: State<'_, AppState>,
    idx: Index,
    elem: Element,
) -> Result<MutationResult, String> {
    update_at(state.list_repo.as_ref(), idx, elem).await
}

/// Remove the element at `idx`
#[tauri::command]
pub async fn remove_element_at(
    state: State<'_, AppState>,
    idx: Index,
) -> Result<MutationResult, String> {
    remove_at(state.list_repo.as_ref(), idx).await
}

async fn fetch_all(repo: &dyn ListRepository) -> Result<Vec<Element>, String> {
    repo.list_all().await.map_err(|e| {
        log::error!("list_all failed: {}", e);
        e.to_string()
    })
}

async fn add_at(repo: &dyn ListRepository, idx: Index, elem: Element) -> Result<MutationResult, String> {
    let result = MutationResult::from_domain(repo.add_at(idx, &elem).await);
    answer("add_element_at", idx, result)
}

async fn update_at(repo: &dyn ListRepository, idx: Index, elem: Element) -> Result<MutationResult, String> {
    let result = MutationResult::from_domain(repo.update_at(idx, &elem).await);
    answer("update_element_at", idx, result)
}

async fn remove_at(repo: &dyn ListRepository, idx: Index) -> Result<MutationResult, String> {
    let result = MutationResult::from_domain(repo.remove_at(idx).await);
    answer("remove_element_at", idx, result)
}

fn answer(
    cmd: &str,
    idx: Index,
    result: crate::domain::DomainResult<MutationResult>,
) -> Result<MutationResult, String> {
    match result {
        Ok(MutationResult::IndexOutOfBounds) => {
            log::warn!("{}: index {} out of bounds", cmd, idx);
            Ok(MutationResult::IndexOutOfBounds)
        }
        Ok(res) => Ok(res),
        Err(e) => {
            log::error!("{} at {} failed: {}", cmd, idx, e);
            Err(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Status;
    use crate::repository::{init_db, SqliteListRepository};
    use std::path::PathBuf;

    fn repo() -> SqliteListRepository {
        SqliteListRepository::new(init_db(&PathBuf::from(":memory:")).unwrap().conn)
    }

    #[tokio::test]
    async fn test_commands_answer_ok_and_out_of_bounds() {
        let repo = repo();

        let res = add_at(&repo, 0, Element::new("Buy milk", Status::Todo)).await;
        assert_eq!(res, Ok(MutationResult::Ok));

        let res = add_at(&repo, 5, Element::new("Far", Status::Todo)).await;
        assert_eq!(res, Ok(MutationResult::IndexOutOfBounds));

        let res = update_at(&repo, 1, Element::new("Nope", Status::Done)).await;
        assert_eq!(res, Ok(MutationResult::IndexOutOfBounds));

        let res = remove_at(&repo, 0).await;
        assert_eq!(res, Ok(MutationResult::Ok));

        assert_eq!(fetch_all(&repo).await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_toggle_via_update() {
        let repo = repo();
        add_at(&repo, 0, Element::new("Buy milk", Status::Todo)).await.unwrap();

        update_at(&repo, 0, Element::new("Buy milk", Status::Done)).await.unwrap();

        assert_eq!(
            fetch_all(&repo).await.unwrap(),
            vec![Element::new("Buy milk", Status::Done)]
        );
    }
}
