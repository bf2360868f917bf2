use criterion::{criterion_group, criterion_main, Criterion};

use quizgrid_core::model::{Answer, Question};
use quizgrid_core::scoring::score;

fn build_assignment(n: usize) -> (Vec<Question>, Vec<Option<Answer>>) {
    let mut questions = Vec::with_capacity(n);
    let mut answers = Vec::with_capacity(n);
    for i in 0..n {
        match i % 3 {
            0 => {
                questions.push(Question::Test {
                    q: format!("Question {i}"),
                    image: None,
                    options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                    correct: i % 4,
                });
                answers.push(Some(Answer::Choice(i % 4)));
            }
            1 => {
                questions.push(Question::Fill {
                    q: format!("Question {i}"),
                    image: None,
                    answers: vec![
                        vec!["cat".into(), "kitty".into()],
                        vec!["dog".into(), "puppy".into()],
                    ],
                });
                answers.push(Some(Answer::Blanks(vec!["Cat".into(), "DOG ".into()])));
            }
            _ => {
                questions.push(Question::Sentence {
                    q: None,
                    image: None,
                    sentence: "I ___ to school ___ day.".into(),
                    answers: vec![vec!["go".into()], vec!["every".into()]],
                });
                answers.push(Some(Answer::Blanks(vec!["go".into(), "every".into()])));
            }
        }
    }
    (questions, answers)
}

fn bench_scoring(c: &mut Criterion) {
    let (questions, answers) = build_assignment(300);
    c.bench_function("score_300_questions", |b| {
        b.iter(|| score(std::hint::black_box(&questions), std::hint::black_box(&answers)))
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
