/*!
# `IF <comparison> THEN` ... `ENDIF`

## Purpose
Run the enclosed statements only when the comparison holds.

## Remarks
`THEN` must end its line. There is no `ELSE`; use a second `IF` with the
opposite comparison.

## Example
```text
INPUT a
IF a < 0 THEN
    PRINT "negative"
ENDIF
```

*/
