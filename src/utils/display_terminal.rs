//! 부팅 로그 출력 유틸리티
//!
//! 로그인 서비스 기동 시 레지스트리 초기화 진행 상황을 터미널에
//! 단계별로 표시합니다. 구조화 로그(log 크레이트)와 별개로,
//! 기동 순서를 한눈에 볼 수 있는 사람용 출력입니다.

/// 제목을 구분선 박스로 감싸 출력합니다.
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │              login-service ready             │
/// └──────────────────────────────────────────────┘
/// ```
pub fn print_boxed_title(title: &str) {
    let line = "─".repeat(46);

    println!("┌{}┐", line);
    println!("│{:^45}│", title);
    println!("└{}┘", line);
}

/// 초기화 단계의 시작을 출력합니다.
///
/// ```text
/// [1/4] 데이터 저장소 연결
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("[{}] {}", step, description);
}

/// 초기화 단계의 완료와 처리 건수를 출력합니다.
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("[{}] {} 완료 ({}건)", step, description, count);
}

/// 단계에 속한 개별 컴포넌트의 상태를 출력합니다.
///
/// ```text
///     · AccountRepository ... 준비됨
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("    · {} ... {}", name, status);
}

/// 레지스트리 초기화 요약을 출력합니다.
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("서비스 레지스트리 초기화 완료");
    println!("    리포지토리: {}", repos);
    println!("    서비스: {}", services);
    println!("    전체 컴포넌트: {}", repos + services);
    println!();
}

/// 캐시 준비 상태를 출력합니다.
pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("    · {} 캐시 준비됨 ({}건)", cache_type, count);
}
