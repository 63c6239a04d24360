//! 변환 엔진 전체에 대한 왕복(round-trip) 성질 테스트
