use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::results::{requests::SaveResultRequest, responses::SaveResultResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    bad_request, check_subject_access, current_user, not_found, storage_error,
};

fn valid_score(score: f64) -> bool {
    score.is_finite() && score >= 0.0
}

/// 按 (学生, 科目) 新建或更新成绩
pub async fn save_result(
    service: &ResultService,
    request: &HttpRequest,
    req: SaveResultRequest,
) -> ActixResult<HttpResponse> {
    if !valid_score(req.test) || !valid_score(req.exam) {
        return Ok(bad_request(
            ErrorCode::ResultScoreInvalid,
            "Scores must be non-negative numbers",
        ));
    }

    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = check_subject_access(&storage, &user, req.subject_id).await {
        return Ok(resp);
    }

    match storage.get_student_by_id(req.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::ProfileNotFound, "Student not found")),
        Err(e) => return Ok(storage_error("Failed to load student", e)),
    }

    match storage.upsert_result(req).await {
        Ok((result, created)) => {
            let message = if created {
                "Scores Saved"
            } else {
                "Scores Updated"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SaveResultResponse { result, created },
                message,
            )))
        }
        Err(e) => Ok(storage_error("Scores Could Not Be Saved", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_score() {
        assert!(valid_score(0.0));
        assert!(valid_score(37.5));
        assert!(!valid_score(-1.0));
        assert!(!valid_score(f64::NAN));
        assert!(!valid_score(f64::INFINITY));
    }
}
