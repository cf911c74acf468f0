//! Expanded view of a single question.

use leptos::*;

use crate::Question;

#[component]
pub fn QuestionDetail(question: Question) -> impl IntoView {
    let text = question.question.clone().unwrap_or_default();
    let rows = question.option_rows();
    let correct_answer = question.correct_answer();
    let marks = question.marks().map(ToString::to_string);

    view! {
        <div class="question-details">
            <div class="question-text">
                <h4>"Question:"</h4>
                <p>{text}</p>
            </div>

            {(!rows.is_empty()).then(|| view! {
                <div class="question-options">
                    <h4>"Options:"</h4>
                    <ul>
                        {rows.into_iter().map(|row| {
                            let class = if row.is_correct { "correct-answer" } else { "" };
                            view! {
                                <li class=class>
                                    {row.text}
                                    {row.is_correct.then_some(" ✓")}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            })}

            {correct_answer.map(|answer| view! {
                <div class="correct-answer-section">
                    <h4>"Correct Answer:"</h4>
                    <p class="answer">{answer}</p>
                </div>
            })}

            {marks.map(|marks| view! {
                <div class="marks-section">
                    <h4>"Marks:"</h4>
                    <p>{marks}</p>
                </div>
            })}
        </div>
    }
}
